//! Fixed-width integer serialisation between byte slices and native
//! integers, parameterised by byte order.

use byteorder::ByteOrder;

pub fn read_u16<E: ByteOrder>(buffer: &[u8]) -> u16 {
    E::read_u16(buffer)
}

pub fn read_u32<E: ByteOrder>(buffer: &[u8]) -> u32 {
    E::read_u32(buffer)
}

pub fn read_u64<E: ByteOrder>(buffer: &[u8]) -> u64 {
    E::read_u64(buffer)
}

pub fn write_u16<E: ByteOrder>(buffer: &mut [u8], value: u16) {
    E::write_u16(buffer, value);
}

pub fn write_u32<E: ByteOrder>(buffer: &mut [u8], value: u32) {
    E::write_u32(buffer, value);
}

pub fn write_u64<E: ByteOrder>(buffer: &mut [u8], value: u64) {
    E::write_u64(buffer, value);
}
