use crate::{ESCAPE, MAX_RUN, RUN_THRESHOLD};
use std::fmt::Debug;
use std::{fmt, io};

/// Streaming encoder. Bytes go in through [`Rle::update`] or [`io::Write`],
/// tokens come out on the wrapped writer.
///
/// The pending run is only written once it is broken by a different byte,
/// reaches [`MAX_RUN`], or the encoder is finalized. Dropping an encoder
/// without calling [`Rle::finalize`] loses that run.
pub struct Rle<W> {
    status: RleStatus,
    threshold: u8,
    writer: W,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum RleStatus {
    Run { value: u8, len: u8 },
    Wait,
}

impl<W: io::Write> Rle<W> {
    pub fn new(writer: W) -> Self {
        Self::with_threshold(writer, RUN_THRESHOLD)
    }

    /// Encoder emitting run tokens only for runs of at least `threshold`
    /// bytes. Escape runs are always tokens. A threshold of zero acts as one.
    pub fn with_threshold(writer: W, threshold: u8) -> Self {
        Rle {
            status: RleStatus::Wait,
            threshold: threshold.max(1),
            writer,
        }
    }

    #[inline(always)]
    pub fn update(&mut self, byte: u8) -> io::Result<()> {
        trace!("update byte 0x{byte:02X}");
        match self.status {
            RleStatus::Run { value, len } if value == byte && len < MAX_RUN => {
                self.status = RleStatus::Run {
                    value,
                    len: len + 1,
                };
            }
            RleStatus::Run { .. } => {
                self.emit()?;
                self.status = RleStatus::Run {
                    value: byte,
                    len: 1,
                };
                trace!("transit to {:?}", self.status);
            }
            RleStatus::Wait => {
                self.status = RleStatus::Run {
                    value: byte,
                    len: 1,
                };
                trace!("transit to {:?}", self.status);
            }
        }
        Ok(())
    }

    // writes the pending run, leaves the status untouched
    #[inline(always)]
    fn emit(&mut self) -> io::Result<()> {
        match self.status {
            RleStatus::Wait => Ok(()),
            RleStatus::Run { value, len } if value == ESCAPE || len >= self.threshold => {
                debug_assert!(len != 0);
                trace!("encode run: value=0x{value:02X}, len={len}");
                self.writer.write_all(&[ESCAPE, len, value])
            }
            RleStatus::Run { value, len } => {
                trace!("encode literal: value=0x{value:02X}, len={len}");
                let literals = [value; MAX_RUN as usize];
                self.writer.write_all(&literals[..len as usize])
            }
        }
    }

    /// Writes the pending run, flushes the writer and hands it back.
    pub fn finalize(mut self) -> io::Result<W> {
        trace!("last block: {:?}", self.status);
        self.emit()?;
        self.status = RleStatus::Wait;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl Debug for RleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RleStatus::Run { value, len } => f
                .debug_struct("Run")
                .field("value", &format!("0x{value:02X}"))
                .field("len", &len)
                .finish(),
            RleStatus::Wait => f.write_str("Wait"),
        }
    }
}

impl<W: io::Write> io::Write for Rle<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for byte in buf.iter() {
            self.update(*byte)?;
        }
        Ok(buf.len())
    }

    // the pending run is kept so it can continue in the next write
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
