//! Output-stream sinks over `std::io::Write`, plus the platform shims for
//! durable writes and operating-system entropy.

use std::fs::File;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::Path;

use byteorder::{ByteOrder, WriteBytesExt};
use digest::Digest;

/// Width-tagged integer writing on top of any byte sink, in the byte
/// order chosen by the type parameter.
pub struct DataOutputStream<W, E> {
    inner: W,
    _endian: PhantomData<E>,
}

impl<W: Write, E: ByteOrder> DataOutputStream<W, E> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            _endian: PhantomData,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_u8(&mut self, value: u8) -> io::Result<()> {
        self.inner.write_u8(value)
    }

    pub fn write_u16(&mut self, value: u16) -> io::Result<()> {
        self.inner.write_u16::<E>(value)
    }

    pub fn write_u32(&mut self, value: u32) -> io::Result<()> {
        self.inner.write_u32::<E>(value)
    }

    pub fn write_u64(&mut self, value: u64) -> io::Result<()> {
        self.inner.write_u64::<E>(value)
    }
}

impl<W: Write, E> Write for DataOutputStream<W, E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Folds every written byte into a running digest.
pub struct HashOutputStream<D: Digest> {
    hasher: D,
}

impl<D: Digest> HashOutputStream<D> {
    pub fn new() -> Self {
        Self { hasher: D::new() }
    }

    pub fn finalize(self) -> digest::Output<D> {
        self.hasher.finalize()
    }
}

impl<D: Digest> Default for HashOutputStream<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> Write for HashOutputStream<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts bytes without storing them, for size estimation.
#[derive(Default, Debug)]
pub struct SizeOutputStream {
    size: u64,
}

impl SizeOutputStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Write for SizeOutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.size += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serialises into a caller-provided buffer; writing past its end is an
/// error.
pub struct SpanOutputStream<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> SpanOutputStream<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Write for SpanOutputStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.position + buf.len() > self.buffer.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "span output stream overflow",
            ));
        }
        self.buffer[self.position..self.position + buf.len()].copy_from_slice(buf);
        self.position += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A file sink with an explicit durability barrier.
pub struct FileOutputStream {
    file: File,
}

impl FileOutputStream {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: File::create(path)?,
        })
    }

    /// Blocks until all previously written data is durable. `sync_data`
    /// maps to `fdatasync`, `F_FULLFSYNC` or `FlushFileBuffers` as the
    /// platform requires.
    pub fn datasync(&self) -> io::Result<()> {
        self.file.sync_data()
    }
}

impl Write for FileOutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Fills the buffer with cryptographically strong bytes from the
/// operating system.
pub fn entropy(buffer: &mut [u8]) -> Result<(), getrandom::Error> {
    getrandom::getrandom(buffer)
}
