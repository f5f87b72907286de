//! Minimal binary container for waveform tensors.
//!
//! Layout (all integers little-endian):
//! - 14-byte magic `GAINSEL-WAVEFM`
//! - `u32` rank, followed by `rank` `u32` dimension sizes
//! - `f32` samples in row-major order

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use memmap2::Mmap;
use ndarray::{ArrayD, ArrayViewD, IxDyn};

use crate::consts::{WVF_MAGIC, WVF_MAX_RANK, WVF_PREAMBLE_SIZE};
use crate::error::{GainSelectionError, Result};

const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Tensor shape stored at the start of a waveform file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveformHeader {
    pub shape: Vec<usize>,
}

impl WaveformHeader {
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Byte offset of the first sample.
    pub fn data_offset(&self) -> usize {
        WVF_PREAMBLE_SIZE + 4 * self.rank()
    }

    pub fn element_count(&self) -> Result<usize> {
        self.shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| GainSelectionError::InvalidWaveformFile("shape too large".into()))
    }

    pub fn data_byte_size(&self) -> Result<usize> {
        self.element_count()?
            .checked_mul(SAMPLE_BYTES)
            .ok_or_else(|| GainSelectionError::InvalidWaveformFile("data size overflow".into()))
    }

    /// Byte offset one past the last sample.
    pub fn data_end(&self) -> Result<usize> {
        self.data_offset()
            .checked_add(self.data_byte_size()?)
            .ok_or_else(|| GainSelectionError::InvalidWaveformFile("data size overflow".into()))
    }
}

/// Memory-mapped waveform file reader.
pub struct WaveformReader {
    mmap: Mmap,
    pub header: WaveformHeader,
}

impl WaveformReader {
    /// Open a waveform file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        if (file.metadata()?.len() as usize) < WVF_PREAMBLE_SIZE {
            return Err(GainSelectionError::InvalidWaveformFile(
                "file too small for header".into(),
            ));
        }
        let mmap = unsafe { Mmap::map(&file)? };

        if &mmap[..WVF_MAGIC.len()] != WVF_MAGIC {
            return Err(GainSelectionError::InvalidWaveformFile(
                "missing GAINSEL-WAVEFM magic".into(),
            ));
        }

        let header = parse_header(&mmap)?;
        let expected = header.data_end()?;
        if mmap.len() < expected {
            return Err(GainSelectionError::InvalidWaveformFile(format!(
                "file truncated: expected {} bytes, got {}",
                expected,
                mmap.len()
            )));
        }

        Ok(Self { mmap, header })
    }

    /// Decode all samples into an array of the stored shape.
    pub fn read(&self) -> Result<ArrayD<f32>> {
        let offset = self.header.data_offset();
        let raw = &self.mmap[offset..self.header.data_end()?];
        let mut data = vec![0.0f32; self.header.element_count()?];
        LittleEndian::read_f32_into(raw, &mut data);
        Ok(ArrayD::from_shape_vec(IxDyn(&self.header.shape), data)?)
    }
}

fn parse_header(buf: &[u8]) -> Result<WaveformHeader> {
    let mut cursor = Cursor::new(&buf[WVF_MAGIC.len()..]);

    let rank = cursor.read_u32::<LittleEndian>()? as usize;
    if rank == 0 || rank > WVF_MAX_RANK {
        return Err(GainSelectionError::InvalidWaveformFile(format!(
            "unsupported rank {}",
            rank
        )));
    }
    let mut shape = Vec::with_capacity(rank);
    for _ in 0..rank {
        shape.push(cursor.read_u32::<LittleEndian>()? as usize);
    }
    Ok(WaveformHeader { shape })
}

/// Read a whole waveform file.
pub fn read_waveforms(path: &Path) -> Result<ArrayD<f32>> {
    WaveformReader::open(path)?.read()
}

/// Write `waveforms` to `path`, replacing any existing file.
pub fn write_waveforms(path: &Path, waveforms: ArrayViewD<'_, f32>) -> Result<()> {
    let rank = waveforms.ndim();
    if rank == 0 || rank > WVF_MAX_RANK {
        return Err(GainSelectionError::UnsupportedRank { rank });
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(WVF_MAGIC)?;
    writer.write_u32::<LittleEndian>(rank as u32)?;
    for &dim in waveforms.shape() {
        let dim = u32::try_from(dim).map_err(|_| {
            GainSelectionError::InvalidWaveformFile(format!("dimension {} exceeds u32", dim))
        })?;
        writer.write_u32::<LittleEndian>(dim)?;
    }
    for &v in waveforms.iter() {
        writer.write_f32::<LittleEndian>(v)?;
    }
    writer.flush()?;
    Ok(())
}
