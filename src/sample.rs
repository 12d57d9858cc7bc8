use std::{
    fmt,
    io::{self, Write},
};

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

/// Byte order of the samples in the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Endianess {
    #[default]
    Native,
    Little,
    Big,
}

/// Element type of the samples in the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SampleType {
    U8,
    I8,
    #[default]
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl SampleType {
    /// Width of one sample in bytes
    pub fn width(self) -> usize {
        match self {
            SampleType::U8 | SampleType::I8 => 1,
            SampleType::U16 | SampleType::I16 => 2,
            SampleType::U32 | SampleType::I32 | SampleType::F32 => 4,
            SampleType::U64 | SampleType::I64 | SampleType::F64 => 8,
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleType::U8 => "uint8",
            SampleType::I8 => "int8",
            SampleType::U16 => "uint16",
            SampleType::I16 => "int16",
            SampleType::U32 => "uint32",
            SampleType::I32 => "int32",
            SampleType::U64 => "uint64",
            SampleType::I64 => "int64",
            SampleType::F32 => "float32",
            SampleType::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// A fixed-width scalar that can be read from a raw volume and written as text
///
/// Integers are written in plain decimal. Floats use the shortest
/// representation that round-trips and always keeps a fractional part or an
/// exponent (`1.0`, `0.04`, `1e-7`), independent of the locale.
pub trait Sample: Copy + Default + fmt::Debug {
    const WIDTH: usize;

    /// Decode `src` into `dst`; `src.len()` must be `dst.len() * WIDTH`
    fn decode_into<B: ByteOrder>(src: &[u8], dst: &mut [Self]);

    fn write_text<W: Write>(self, out: &mut W) -> io::Result<()>;

    /// Decode every whole sample in `src`, ignoring trailing bytes
    fn decode(src: &[u8], endianess: Endianess) -> Vec<Self> {
        let mut dst = vec![Self::default(); src.len() / Self::WIDTH];
        let src = &src[..dst.len() * Self::WIDTH];
        match endianess {
            Endianess::Native => Self::decode_into::<NativeEndian>(src, &mut dst),
            Endianess::Little => Self::decode_into::<LittleEndian>(src, &mut dst),
            Endianess::Big => Self::decode_into::<BigEndian>(src, &mut dst),
        }
        dst
    }
}

impl Sample for u8 {
    const WIDTH: usize = 1;

    fn decode_into<B: ByteOrder>(src: &[u8], dst: &mut [Self]) {
        dst.copy_from_slice(src);
    }

    fn write_text<W: Write>(self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Sample for i8 {
    const WIDTH: usize = 1;

    fn decode_into<B: ByteOrder>(src: &[u8], dst: &mut [Self]) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = *s as i8;
        }
    }

    fn write_text<W: Write>(self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

macro_rules! impl_sample {
    ($ty:ty, $read_into:ident, $fmt:literal) => {
        impl Sample for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn decode_into<B: ByteOrder>(src: &[u8], dst: &mut [Self]) {
                B::$read_into(src, dst);
            }

            fn write_text<W: Write>(self, out: &mut W) -> io::Result<()> {
                write!(out, $fmt, self)
            }
        }
    };
}

impl_sample!(u16, read_u16_into, "{}");
impl_sample!(i16, read_i16_into, "{}");
impl_sample!(u32, read_u32_into, "{}");
impl_sample!(i32, read_i32_into, "{}");
impl_sample!(u64, read_u64_into, "{}");
impl_sample!(i64, read_i64_into, "{}");
impl_sample!(f32, read_f32_into, "{:?}");
impl_sample!(f64, read_f64_into, "{:?}");
