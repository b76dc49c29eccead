//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns, on its own thread:
//! - OutputStream (must stay alive)
//! - at most one Sink (the loaded session)
//! - command loop + periodic position ticks
//!
//! [`RodioEngine`] is the UI-side half: it only sends commands, so no file
//! I/O happens on the UI thread. Sources are probed and opened here; a load
//! that fails comes back as an `Error` event. Events arrive on the receiver
//! returned by [`start_engine`], tagged with the session they belong to.
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, error, info, warn};

use super::probe::probe;
use super::{EngineEvent, EngineEventKind, MediaEngine, SessionId};
use crate::core::error::{PlayerError, Result};

const TICK_MS: u64 = 200;

type FileDecoder = Decoder<BufReader<File>>;

enum EngineCommand {
    Load { session: SessionId, path: PathBuf },
    Play(SessionId),
    Pause(SessionId),
    Stop(SessionId),
    Seek(SessionId, Duration),
    SetVolume(SessionId, f32),
    Dispose(SessionId),
    Shutdown,
}

/// Handle to the source loaded for one session.
#[derive(Debug)]
pub struct RodioHandle {
    session: SessionId,
}

pub struct RodioEngine {
    command_tx: Sender<EngineCommand>,
    // Set when the audio output could not be opened; every load fails with it.
    unavailable: Option<String>,
}

/// Spawns the playback thread and returns:
/// - RodioEngine (hand it to the sequencer)
/// - Receiver<EngineEvent> (drained by the GUI's playback tick)
pub fn start_engine() -> (RodioEngine, Receiver<EngineEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<EngineCommand>();
    let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
    let (ready_tx, ready_rx) = mpsc::channel::<std::result::Result<(), String>>();

    let spawned = thread::Builder::new()
        .name("playback".to_string())
        .spawn(move || {
            let stream = match OutputStreamBuilder::open_default_stream() {
                Ok(stream) => stream,
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));

            PlaybackThread::new(stream, event_tx).run(command_rx);
        });

    let unavailable = match spawned {
        Ok(_) => match ready_rx.recv() {
            Ok(Ok(())) => None,
            Ok(Err(msg)) => Some(msg),
            Err(_) => Some("playback thread exited during startup".to_string()),
        },
        Err(e) => Some(format!("could not spawn playback thread: {e}")),
    };

    match &unavailable {
        None => info!("audio output ready"),
        Some(reason) => error!(%reason, "audio output unavailable"),
    }

    (
        RodioEngine {
            command_tx,
            unavailable,
        },
        event_rx,
    )
}

impl RodioEngine {
    /// Best-effort send. If the engine died, the command is dropped.
    fn send(&self, cmd: EngineCommand) {
        if self.command_tx.send(cmd).is_err() {
            debug!("playback thread gone; command dropped");
        }
    }
}

impl MediaEngine for RodioEngine {
    type Handle = RodioHandle;

    fn create(&mut self, session: SessionId, source: &Path) -> Result<RodioHandle> {
        if let Some(reason) = &self.unavailable {
            return Err(PlayerError::Load(format!("Audio output unavailable: {reason}")));
        }

        self.command_tx
            .send(EngineCommand::Load {
                session,
                path: source.to_path_buf(),
            })
            .map_err(|_| PlayerError::Load("Playback engine stopped".to_string()))?;

        Ok(RodioHandle { session })
    }

    fn play(&mut self, handle: &RodioHandle) {
        self.send(EngineCommand::Play(handle.session));
    }

    fn pause(&mut self, handle: &RodioHandle) {
        self.send(EngineCommand::Pause(handle.session));
    }

    fn stop(&mut self, handle: &RodioHandle) {
        self.send(EngineCommand::Stop(handle.session));
    }

    fn seek(&mut self, handle: &RodioHandle, position: Duration) {
        self.send(EngineCommand::Seek(handle.session, position));
    }

    fn set_volume(&mut self, handle: &RodioHandle, level: f32) {
        self.send(EngineCommand::SetVolume(handle.session, level));
    }

    fn dispose(&mut self, handle: RodioHandle) -> Result<()> {
        self.command_tx
            .send(EngineCommand::Dispose(handle.session))
            .map_err(|_| PlayerError::Engine("playback thread is gone".to_string()))
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        let _ = self.command_tx.send(EngineCommand::Shutdown);
    }
}

/// Validate with symphonia, then open for rodio. Duration comes from the
/// probe, or from the decoder when the container doesn't say.
fn open_source(path: &Path) -> Result<(FileDecoder, Option<Duration>)> {
    let probed = probe(path)?;
    let decoder = open_decoder(path)?;
    let duration = probed.duration.or_else(|| decoder.total_duration());
    Ok((decoder, duration))
}

fn open_decoder(path: &Path) -> Result<FileDecoder> {
    let file = File::open(path).map_err(|e| PlayerError::Load(format!("Open failed: {e}")))?;
    Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Load(format!("Decode failed: {e}")))
}

/// The loaded session on the playback thread.
struct Slot {
    session: SessionId,
    path: PathBuf,
    sink: Sink,
    duration: Option<Duration>,
    volume: f32,
    // EndOfMedia already reported.
    ended: bool,
}

struct PlaybackThread {
    // Keep this alive for the lifetime of the thread!
    stream: OutputStream,
    slot: Option<Slot>,
    event_tx: Sender<EngineEvent>,
}

impl PlaybackThread {
    fn new(stream: OutputStream, event_tx: Sender<EngineEvent>) -> Self {
        Self {
            stream,
            slot: None,
            event_tx,
        }
    }

    fn run(&mut self, command_rx: Receiver<EngineCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            self.unload();
                            return;
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.unload();
    }

    /// Returns true on shutdown.
    fn handle_command(&mut self, cmd: EngineCommand) -> bool {
        match cmd {
            EngineCommand::Load { session, path } => {
                // The UI disposes first; this only matters if a Dispose was lost.
                self.unload();

                let (source, duration) = match open_source(&path) {
                    Ok(opened) => opened,
                    Err(e) => {
                        warn!(%session, path = %path.display(), error = %e, "load failed");
                        self.emit(session, EngineEventKind::Error(e.to_string()));
                        return false;
                    }
                };

                let sink = self.new_sink(source, 1.0);
                debug!(%session, path = %path.display(), ?duration, "loaded");
                self.slot = Some(Slot {
                    session,
                    path,
                    sink,
                    duration,
                    volume: 1.0,
                    ended: false,
                });
                self.emit(session, EngineEventKind::Started { duration });
            }
            EngineCommand::Play(session) => {
                if let Some(slot) = self.slot_for(session) {
                    slot.sink.play();
                }
            }
            EngineCommand::Pause(session) => {
                if let Some(slot) = self.slot_for(session) {
                    slot.sink.pause();
                }
            }
            EngineCommand::Stop(session) => self.rewind(session),
            EngineCommand::Seek(session, position) => {
                if let Some(slot) = self.slot_for(session) {
                    if let Err(e) = slot.sink.try_seek(position) {
                        warn!(%session, error = %e, "seek failed (decoder may not support it)");
                    }
                }
            }
            EngineCommand::SetVolume(session, level) => {
                if let Some(slot) = self.slot_for(session) {
                    slot.volume = level.clamp(0.0, 1.0);
                    slot.sink.set_volume(slot.volume);
                }
            }
            EngineCommand::Dispose(session) => {
                if self.slot.as_ref().is_some_and(|s| s.session == session) {
                    self.unload();
                }
            }
            EngineCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        let Some(slot) = self.slot.as_mut() else {
            return;
        };
        if slot.ended {
            return;
        }

        let _ = self.event_tx.send(EngineEvent {
            session: slot.session,
            kind: EngineEventKind::Position {
                position: slot.sink.get_pos(),
                total: slot.duration,
            },
        });

        if slot.sink.empty() {
            slot.ended = true;
            let _ = self.event_tx.send(EngineEvent {
                session: slot.session,
                kind: EngineEventKind::EndOfMedia,
            });
        }
    }

    /// Stop = a fresh sink on a re-opened source, paused at zero.
    fn rewind(&mut self, session: SessionId) {
        let Some(slot) = self.slot.take() else {
            return;
        };
        if slot.session != session {
            self.slot = Some(slot);
            return;
        }

        slot.sink.stop();
        match open_decoder(&slot.path) {
            Ok(source) => {
                let sink = self.new_sink(source, slot.volume);
                self.slot = Some(Slot {
                    sink,
                    ended: false,
                    ..slot
                });
            }
            Err(e) => self.emit(session, EngineEventKind::Error(e.to_string())),
        }
    }

    fn new_sink(&self, source: FileDecoder, volume: f32) -> Sink {
        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.set_volume(volume);
        sink.append(source);
        sink
    }

    fn slot_for(&mut self, session: SessionId) -> Option<&mut Slot> {
        self.slot.as_mut().filter(|s| s.session == session)
    }

    fn unload(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.sink.stop();
            debug!(session = %slot.session, "unloaded");
        }
    }

    fn emit(&self, session: SessionId, kind: EngineEventKind) {
        let _ = self.event_tx.send(EngineEvent { session, kind });
    }
}
