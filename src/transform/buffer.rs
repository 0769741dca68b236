//! In-memory transform store with bounded-wait lookup.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use nalgebra::Isometry3;
use parking_lot::{Condvar, Mutex};

use crate::error::{DrishtiError, Result};

use super::TransformResolver;

/// Last-write-wins store of frame-pair transforms.
///
/// Producers publish transforms with [`insert`]; a [`resolve`] call for a
/// pair that has not been published yet blocks on a condvar until it
/// arrives or the wait bound expires. The stored transform is the most
/// recently published one for the pair; the lookup timestamp is carried
/// through for diagnostics.
///
/// [`insert`]: TransformBuffer::insert
/// [`resolve`]: TransformResolver::resolve
#[derive(Debug, Default)]
pub struct TransformBuffer {
    transforms: Mutex<HashMap<(String, String), Isometry3<f32>>>,
    available: Condvar,
}

impl TransformBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            transforms: Mutex::new(HashMap::new()),
            available: Condvar::new(),
        }
    }

    /// Publish the transform mapping `source_frame` into `target_frame`,
    /// waking any resolver blocked on the pair.
    pub fn insert(&self, target_frame: &str, source_frame: &str, transform: Isometry3<f32>) {
        let mut transforms = self.transforms.lock();
        transforms.insert(
            (target_frame.to_string(), source_frame.to_string()),
            transform,
        );
        self.available.notify_all();
    }
}

impl TransformResolver for TransformBuffer {
    fn resolve(
        &self,
        target_frame: &str,
        source_frame: &str,
        timestamp_us: u64,
        max_wait: Duration,
    ) -> Result<Isometry3<f32>> {
        let deadline = Instant::now() + max_wait;
        let key = (target_frame.to_string(), source_frame.to_string());

        let mut transforms = self.transforms.lock();
        loop {
            if let Some(transform) = transforms.get(&key) {
                return Ok(*transform);
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(DrishtiError::TransformUnavailable {
                    target_frame: target_frame.to_string(),
                    source_frame: source_frame.to_string(),
                    timestamp_us,
                    cause: format!("no transform published within {:?}", max_wait),
                });
            }
            self.available.wait_for(&mut transforms, deadline - now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Translation3, UnitQuaternion};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_resolve_published_transform() {
        let buffer = TransformBuffer::new();
        let tf = Isometry3::from_parts(Translation3::new(1.0, 2.0, 3.0), UnitQuaternion::identity());
        buffer.insert("odom", "map", tf);

        let resolved = buffer
            .resolve("odom", "map", 1000, Duration::from_millis(10))
            .unwrap();
        assert_relative_eq!(resolved.translation.x, 1.0);
        assert_relative_eq!(resolved.translation.z, 3.0);
    }

    #[test]
    fn test_resolve_times_out_on_missing_pair() {
        let buffer = TransformBuffer::new();
        let started = Instant::now();
        let err = buffer
            .resolve("odom", "map", 1000, Duration::from_millis(100))
            .unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, DrishtiError::TransformUnavailable { .. }));
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(500), "waited {:?}", elapsed);
    }

    #[test]
    fn test_resolve_wakes_on_late_insert() {
        let buffer = Arc::new(TransformBuffer::new());

        let writer = {
            let buffer = buffer.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                buffer.insert("odom", "map", Isometry3::identity());
            })
        };

        let resolved = buffer.resolve("odom", "map", 0, Duration::from_secs(2));
        writer.join().unwrap();
        assert!(resolved.is_ok());
    }

    #[test]
    fn test_error_carries_frame_names() {
        let buffer = TransformBuffer::new();
        let err = buffer
            .resolve("base_link", "map", 42, Duration::from_millis(1))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("base_link"));
        assert!(msg.contains("map"));
        assert!(msg.contains("42"));
    }
}
