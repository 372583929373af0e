//! Unit tests for the workflow module.

mod renderer_tests;
