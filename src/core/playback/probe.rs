//! core/playback/probe.rs
//! Media probing (Symphonia): is this source playable, and how long is it?
//!
//! Runs before a source is handed to rodio so an unreadable or unsupported
//! file fails the load up front instead of producing silence.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use crate::core::error::{PlayerError, Result};

/// What probing learned about a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Probe {
    pub duration: Option<Duration>,
}

pub(crate) fn probe(path: &Path) -> Result<Probe> {
    let file = File::open(path).map_err(|e| PlayerError::Load(format!("Open failed: {e}")))?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| PlayerError::Load(format!("Unsupported format: {e}")))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| PlayerError::Load("No supported audio track found".to_string()))?;

    // Make sure a decoder exists for the codec, not just a demuxer for the container.
    symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| PlayerError::Load(format!("Unsupported codec: {e}")))?;

    Ok(Probe {
        duration: duration_from_params(track.codec_params.time_base, track.codec_params.n_frames),
    })
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<Duration> {
    let tb = time_base?;
    let frames = n_frames?;

    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let t = tb.calc_time(frames);
    Some(Duration::from_secs(t.seconds) + Duration::from_secs_f64(t.frac))
}
