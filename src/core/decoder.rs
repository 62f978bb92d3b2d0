// src/core/decoder.rs
//
// Audio decoding via Symphonia. Anything Symphonia can probe is accepted;
// the result is interleaved f32 samples plus the stream layout.

use log::{debug, warn};
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::signal::AudioSignal;
use crate::error::{DecodeError, Result};

/// Decoded audio before channel averaging
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_secs: f64,
    pub codec_name: String,
}

impl DecodedAudio {
    /// Average all channels into a mono signal
    pub fn to_signal(&self) -> Result<AudioSignal> {
        AudioSignal::from_interleaved(&self.samples, self.channels, self.sample_rate)
    }
}

/// Decode an audio file, using its extension as a format hint
pub fn decode_audio(path: &Path) -> std::result::Result<DecodedAudio, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    debug!("Decoding {}", path.display());
    decode_source(Box::new(file), hint)
}

/// Decode an in-memory file
pub fn decode_bytes(
    bytes: Vec<u8>,
    extension: Option<&str>,
) -> std::result::Result<DecodedAudio, DecodeError> {
    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }
    decode_source(Box::new(Cursor::new(bytes)), hint)
}

fn decode_source(
    source: Box<dyn MediaSource>,
    hint: Hint,
) -> std::result::Result<DecodedAudio, DecodeError> {
    let mss = MediaSourceStream::new(source, Default::default());

    let mut probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoTrack)?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::MissingSampleRate)?;

    let mut channels = track.codec_params.channels.map(|c| c.count());
    if channels == Some(0) {
        return Err(DecodeError::ZeroChannels);
    }

    let codec_name = symphonia::default::get_codecs()
        .get_codec(track.codec_params.codec)
        .map(|d| d.short_name.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(SymphoniaError::DecodeError(msg)) => {
                warn!("Skipping undecodable packet: {}", msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            channels.get_or_insert(spec.channels.count());
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    let channels = channels.ok_or(DecodeError::NoSamples)?;
    if channels == 0 {
        return Err(DecodeError::ZeroChannels);
    }
    if samples.is_empty() {
        return Err(DecodeError::NoSamples);
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);
    debug!(
        "Decoded {} samples, {} Hz, {} ch, {:.2}s ({})",
        samples.len(),
        sample_rate,
        channels,
        duration_secs,
        codec_name
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
        duration_secs,
        codec_name,
    })
}
