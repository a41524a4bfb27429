use bitstream_io::{BigEndian, BitRead, BitReader};

use stegano_depth_core::bits::bytes_to_bits;
use stegano_depth_core::BitIterator;

// String: H           e
// Binary: 0b01001000  0b01100101
#[test]
fn should_return_the_8_bits_of_h_most_significant_first() {
    let b = [0b0100_1000, 0b0110_0101];
    let mut it = BitIterator::new(&b[..]);

    assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
    assert_eq!(it.next().unwrap(), 1, "2nd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "3rd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "5th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "6th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "7th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "8th bit not correct");
}

#[test]
fn should_return_8_bits_of_e_after_skip_8_and_end() {
    let b = [0b0100_1000, 0b0110_0101];
    let mut it = BitIterator::new(&b[..]).skip(8);

    assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
    assert_eq!(it.next().unwrap(), 1, "2nd bit not correct");
    assert_eq!(it.next().unwrap(), 1, "3rd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "5th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "6th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "7th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "8th bit not correct");
    assert_eq!(
        it.next(),
        None,
        "it should end after the last bit on the last byte"
    );
}

#[test]
fn should_behave_as_the_big_endian_bit_reader() {
    let b = [0b0100_1000, 0b0110_0001, 0xff, 0x00];
    let mut it = BitIterator::new(&b[..]);
    let mut reader = BitReader::endian(&b[..], BigEndian);

    for i in 0..32 {
        assert_eq!(
            it.next().unwrap(),
            if reader.read_bit().unwrap() { 1 } else { 0 },
            "{} bit not correct",
            i
        );
    }
}

#[test]
fn should_match_bytes_to_bits() {
    let b = b"Hello";
    let bits: Vec<u8> = BitIterator::new(&b[..]).collect();

    assert_eq!(bits.len(), 40);
    assert_eq!(bits, bytes_to_bits(b));
}
