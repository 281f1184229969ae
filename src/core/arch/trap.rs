//! Environment Call Handling.
//!
//! The only trap the core takes is `ECALL`. It is serviced synchronously by
//! dispatching on the syscall number in `a7`; the value returned is written
//! to `a0` by the executor. Breakpoints are no-ops and never reach here.

use crate::core::arch::status::Status;
use crate::core::Cpu;
use crate::isa::{abi, sys_ops};

/// Syscall dispatcher for `ECALL`.
pub struct TrapHandler;

impl TrapHandler {
    /// Services an environment call.
    ///
    /// `SYS_EXIT` records `a0` as the guest exit code and sets the halted
    /// flag. Every other syscall number is ignored.
    ///
    /// # Returns
    ///
    /// The value for the return-value register `a0`, which is always 0.
    pub fn ecall(cpu: &mut Cpu) -> u32 {
        match cpu.regs.read(abi::REG_A7) {
            sys_ops::SYS_EXIT => {
                let code = cpu.regs.read(abi::REG_A0);
                log::info!("[Sim] exit({}) at pc={:#010x}", code as i32, cpu.pc);
                cpu.exit_code = Some(code);
                cpu.status.insert(Status::HALTED);
                0
            }
            other => {
                log::debug!("[Sim] ignoring syscall {} at pc={:#010x}", other, cpu.pc);
                0
            }
        }
    }
}
