//! Exit handling: exit codes, signal handlers, process hardening.

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const USAGE: i32 = 2;
pub const INTERRUPTED: i32 = 130;

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit without a traceback
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe {
        // Finish the prompt line so the shell starts on a fresh one.
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(libc::STDOUT_FILENO, b"\n".as_ptr() as *const libc::c_void, 1);
        }
        libc::_exit(INTERRUPTED)
    }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
