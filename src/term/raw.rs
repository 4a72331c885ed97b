//! Raw terminal mode acquisition/restoration and terminal geometry queries.
//!
//! The Unix path talks to `termios` directly, mirroring the original
//! canvas's `tcgetattr`/`tcsetattr` sequence: clear `ICANON`, `ECHO`, and
//! `IEXTEN` from the local flags and `OPOST` from the output flags, leaving
//! everything else untouched so a restore can put it back exactly.

#[cfg(unix)]
mod unix_impl {
    use std::io;
    use std::mem::zeroed;
    use std::os::raw::{c_int, c_uint};
    use std::os::unix::io::RawFd;

    // mini-termios - only the fields we read or touch.
    #[repr(C)]
    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy)]
    pub struct termios {
        c_iflag: c_uint,
        c_oflag: c_uint,
        c_cflag: c_uint,
        c_lflag: c_uint,
        c_line: u8,
        c_cc: [u8; 32],
        c_ispeed: c_uint,
        c_ospeed: c_uint,
    }

    unsafe extern "C" {
        fn tcgetattr(fd: c_int, termios_p: *mut termios) -> c_int;
        fn tcsetattr(fd: c_int, actions: c_int, termios_p: *const termios) -> c_int;
    }

    const TCSANOW: c_int = 0;
    const ICANON: c_uint = 0o0000002;
    const ECHO: c_uint = 0o0000010;
    const IEXTEN: c_uint = 0o0100000;
    const OPOST: c_uint = 0o0000001;

    /// Saved attributes, opaque to callers, used to restore the terminal on
    /// close.
    #[derive(Clone)]
    pub struct SavedAttrs(termios);

    pub fn enter_raw_mode(fd: RawFd) -> io::Result<SavedAttrs> {
        unsafe {
            let mut orig: termios = zeroed();
            if tcgetattr(fd, &mut orig) != 0 {
                return Err(io::Error::last_os_error());
            }
            let saved = SavedAttrs(orig);

            let mut raw = orig;
            raw.c_oflag &= !OPOST;
            raw.c_lflag &= !(ICANON | ECHO | IEXTEN);
            if tcsetattr(fd, TCSANOW, &raw) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(saved)
        }
    }

    pub fn restore(fd: RawFd, saved: &SavedAttrs) -> io::Result<()> {
        unsafe {
            if tcsetattr(fd, TCSANOW, &saved.0) != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}

#[cfg(not(unix))]
mod other_impl {
    use std::io;

    #[derive(Clone)]
    pub struct SavedAttrs;

    pub fn enter_raw_mode<T>(_fd: T) -> io::Result<SavedAttrs> {
        Ok(SavedAttrs)
    }

    pub fn restore<T>(_fd: T, _saved: &SavedAttrs) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(unix)]
pub use unix_impl::{enter_raw_mode, restore, SavedAttrs};
#[cfg(not(unix))]
pub use other_impl::{enter_raw_mode, restore, SavedAttrs};

/// `CSI ?1049h` + `CSI ?25l` + `CSI 2J` + `CSI 0m`: alternate screen, hide
/// cursor, clear, reset SGR to default. Emitted once when the canvas takes
/// over the terminal.
pub const ENTER_SEQUENCE: &[u8] = b"\x1b[?1049h\x1b[?25l\x1b[2J\x1b[0m";

/// `CSI ?1049l` + `CSI ?25h`: leave the alternate screen and show the
/// cursor again. Emitted on close, after attributes are restored.
pub const LEAVE_SEQUENCE: &[u8] = b"\x1b[?1049l\x1b[?25h";

/// `CSI 2J`: clear screen in place, without touching cursor visibility or
/// the screen buffer mode.
pub const CLEAR_SEQUENCE: &[u8] = b"\x1b[2J";

/// Query `sink`'s terminal size in character cells, `(rows, cols)`.
///
/// Queries the sink itself rather than assuming `STDOUT_FILENO`, so a test
/// harness can point a canvas at a pipe or file instead of a real tty.
#[cfg(unix)]
pub fn query_size<F: std::os::fd::AsFd>(sink: &F) -> Option<(u16, u16)> {
    let (w, h) = terminal_size::terminal_size_of(sink)?;
    Some((h.0, w.0))
}

#[cfg(not(unix))]
pub fn query_size<F>(_sink: &F) -> Option<(u16, u16)> {
    let (w, h) = terminal_size::terminal_size()?;
    Some((h.0, w.0))
}
