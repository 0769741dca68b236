//! Calibration listener thread.
//!
//! Drains a private update channel on a dedicated thread and applies
//! each arrival to the shared [`CalibrationBuffer`]. The compute cycle
//! only ever touches the buffer through its short critical section, so
//! updates at arbitrary rate never stall a cycle and a long cycle never
//! stalls updates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::camera::{Calibration, CalibrationBuffer};

/// Sender half of the calibration update channel.
pub type CalibrationSender = Sender<Calibration>;

/// Poll interval for the cooperative stop flag while the channel is idle.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Handle to the background calibration listener thread.
pub struct CalibrationListener {
    handle: JoinHandle<()>,
}

impl CalibrationListener {
    /// Spawn the listener thread.
    ///
    /// Returns the thread handle and the sender used to feed calibration
    /// updates in. The thread exits cooperatively when `running` goes
    /// false (checked each poll interval) or when all senders are
    /// dropped.
    pub fn spawn(
        buffer: Arc<CalibrationBuffer>,
        running: Arc<AtomicBool>,
    ) -> (Self, CalibrationSender) {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = thread::Builder::new()
            .name("calibration".into())
            .spawn(move || run_listener(buffer, rx, running))
            .expect("Failed to spawn calibration listener thread");

        (Self { handle }, tx)
    }

    /// Wait for the thread to finish.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn run_listener(buffer: Arc<CalibrationBuffer>, rx: Receiver<Calibration>, running: Arc<AtomicBool>) {
    log::info!("Calibration listener starting");

    while running.load(Ordering::Relaxed) {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(calibration) => {
                log::debug!(
                    "Calibration update: {}x{} in frame '{}'",
                    calibration.intrinsics.width,
                    calibration.intrinsics.height,
                    calibration.frame_id
                );
                buffer.update(calibration);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Calibration channel closed");
                break;
            }
        }
    }

    log::info!("Calibration listener shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraIntrinsics;
    use std::time::Instant;

    fn test_calibration() -> Calibration {
        Calibration {
            intrinsics: CameraIntrinsics::new(500.0, 500.0, 320.0, 240.0, 640, 480),
            frame_id: "camera".to_string(),
        }
    }

    #[test]
    fn test_update_reaches_buffer() {
        let buffer = Arc::new(CalibrationBuffer::new());
        let running = Arc::new(AtomicBool::new(true));
        let (listener, tx) = CalibrationListener::spawn(buffer.clone(), running.clone());

        tx.send(test_calibration()).unwrap();

        // The listener applies the update asynchronously; poll briefly.
        let deadline = Instant::now() + Duration::from_secs(2);
        while !buffer.is_initialized() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(buffer.is_initialized());
        assert_eq!(buffer.snapshot().unwrap().frame_id, "camera");

        running.store(false, Ordering::Relaxed);
        listener.join().unwrap();
    }

    #[test]
    fn test_stop_flag_terminates_thread() {
        let buffer = Arc::new(CalibrationBuffer::new());
        let running = Arc::new(AtomicBool::new(true));
        let (listener, _tx) = CalibrationListener::spawn(buffer, running.clone());

        running.store(false, Ordering::Relaxed);
        listener.join().unwrap();
    }

    #[test]
    fn test_channel_disconnect_terminates_thread() {
        let buffer = Arc::new(CalibrationBuffer::new());
        let running = Arc::new(AtomicBool::new(true));
        let (listener, tx) = CalibrationListener::spawn(buffer, running);

        drop(tx);
        listener.join().unwrap();
    }
}
