//! Liquid storage models.
//!
//! This module contains models for equipment that holds a liquid inventory:
//! pressure vessels, atmospheric storage tanks, and spheres.

pub mod vessel;
