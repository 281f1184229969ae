//! Test module organization.
//!
//! This module organizes all integration tests for the RV32 emulator.

/// ALU operation tests.
mod alu_tests;



/// End-to-end ROM tests.
mod integration_tests;

/// 32-bit instruction decode and execute tests.
mod isa_tests;
