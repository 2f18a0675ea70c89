use crate::{Error, Malformed, Result, ESCAPE, MAX_RUN};
use std::io;

/// Streaming decoder. Compressed bytes go in through [`DeRle::feed`] or
/// [`io::Write`], the original bytes come out on the wrapped writer.
///
/// A run token may be split across any number of calls. The stream is only
/// known to be complete once [`DeRle::finalize`] succeeds.
pub struct DeRle<W> {
    status: DeRleStatus,
    writer: W,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DeRleStatus {
    Token,
    Count,
    Value { count: u8 },
}

impl<W: io::Write> DeRle<W> {
    pub fn new(writer: W) -> DeRle<W> {
        DeRle {
            status: DeRleStatus::Token,
            writer,
        }
    }

    #[inline(always)]
    pub fn update(&mut self, byte: u8) -> Result<()> {
        trace!("status: {:?}, byte: 0x{byte:02X}", self.status);
        match self.status {
            DeRleStatus::Token if byte == ESCAPE => {
                self.status = DeRleStatus::Count;
            }
            DeRleStatus::Token => {
                trace!("decode literal: 0x{byte:02X}");
                self.writer.write_all(&[byte]).map_err(Error::Decode)?;
            }
            DeRleStatus::Count => {
                if byte == 0 {
                    debug!("rejecting run token with zero count");
                    return Err(Malformed::ZeroCount.into());
                }
                self.status = DeRleStatus::Value { count: byte };
            }
            DeRleStatus::Value { count } => {
                trace!("decode run: value=0x{byte:02X}, count={count}");
                let run = [byte; MAX_RUN as usize];
                self.writer
                    .write_all(&run[..count as usize])
                    .map_err(Error::Decode)?;
                self.status = DeRleStatus::Token;
            }
        }
        Ok(())
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        for byte in bytes.iter() {
            self.update(*byte)?;
        }
        Ok(())
    }

    /// Checks the stream ended between tokens, flushes the writer and hands
    /// it back.
    pub fn finalize(mut self) -> Result<W> {
        if self.status != DeRleStatus::Token {
            debug!("stream ended mid-token in {:?}", self.status);
            return Err(Malformed::TruncatedRun.into());
        }
        self.writer.flush().map_err(Error::Decode)?;
        Ok(self.writer)
    }
}

impl<W: io::Write> io::Write for DeRle<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
