// src/core/decoder.rs
//
// Signal loader: decodes a file into normalized floating-point samples.
// Uses Symphonia for format-agnostic decoding.

use log::debug;
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::DecodeError;

/// Decoded audio ready for analysis.
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
}

impl AudioData {
    /// Frames per channel.
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Deinterleave one channel.
    pub fn channel(&self, index: usize) -> Vec<f32> {
        assert!(index < self.channels);
        self.samples
            .iter()
            .skip(index)
            .step_by(self.channels)
            .copied()
            .collect()
    }

    /// Mean-of-channels mono mixdown. This is the channel-reduction rule the
    /// cutoff detector is defined against.
    pub fn mono_mixdown(&self) -> Vec<f32> {
        if self.channels == 1 {
            return self.samples.clone();
        }

        let num_frames = self.num_frames();
        let mut mono = Vec::with_capacity(num_frames);
        for i in 0..num_frames {
            let frame = &self.samples[i * self.channels..(i + 1) * self.channels];
            mono.push(frame.iter().sum::<f32>() / self.channels as f32);
        }
        mono
    }
}

/// Decode an audio file to floating-point samples.
pub fn decode_audio(path: &Path) -> Result<AudioData, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let meta_opts = MetadataOptions::default();
    let fmt_opts = FormatOptions::default();

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(DecodeError::Probe)?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::MissingSampleRate)?;

    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(2);
    if channels == 0 {
        return Err(DecodeError::NoAudioTrack);
    }

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(DecodeError::Decode)?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(DecodeError::Decode(e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            // A malformed packet only invalidates itself, not the stream
            Err(symphonia::core::errors::Error::DecodeError(_)) => continue,
            Err(e) => return Err(DecodeError::Decode(e)),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(DecodeError::EmptyStream);
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);
    debug!(
        "decoded {}: {} Hz, {} ch, {:.2}s",
        path.display(),
        sample_rate,
        channels,
        duration_secs
    );

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        duration_secs,
    })
}
