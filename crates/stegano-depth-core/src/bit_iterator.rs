use std::io::{ErrorKind, Read};
use std::slice;

/// Yields the bits of everything readable from `R`, most significant bit of each byte first.
///
/// Every bit is returned as `0` or `1`. The iterator ends with the last bit of the last byte,
/// read errors other than [`ErrorKind::Interrupted`] end it as well.
pub struct BitIterator<R> {
    reader: R,
    byte: u8,
    remaining: u8,
}

impl<R> BitIterator<R> {
    pub fn new(reader: R) -> Self {
        BitIterator {
            reader,
            byte: 0,
            remaining: 0,
        }
    }
}

impl<R> Iterator for BitIterator<R>
where
    R: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            let mut b = 0;
            loop {
                match self.reader.read(slice::from_mut(&mut b)) {
                    Ok(0) => return None,
                    Ok(..) => break,
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => return None,
                }
            }
            self.byte = b;
            self.remaining = 8;
        }
        self.remaining -= 1;

        Some((self.byte >> self.remaining) & 1)
    }
}
