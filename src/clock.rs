use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::game::FrameLimiter;

/// Keeps a steady frame rate by sleeping off whatever is left of the frame.
/// A frame that ran long doesn't get paid back by later short ones.
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_frame: None }
    }
}

impl FrameLimiter for FrameClock {
    fn tick(&mut self, rate: u32) {
        let frame = frame_duration(rate);

        if let Some(last) = self.last_frame {
            if let Some(left) = frame.checked_sub(last.elapsed()) {
                sleep(left);
            }
        }

        self.last_frame = Some(Instant::now());
    }
}

fn frame_duration(rate: u32) -> Duration {
    if rate == 0 {
        Duration::from_secs(0)
    } else {
        Duration::from_secs(1) / rate
    }
}
