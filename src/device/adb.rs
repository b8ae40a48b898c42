use crate::device::CaptureDevice;
use crate::error::{Result, ScrapeError};
use crate::snapshot::Snapshot;
use std::process::{Command, Output};

/// Where uiautomator writes its dump on the device
const DEVICE_DUMP_PATH: &str = "/sdcard/window_dump.xml";

/// Swipe gesture used to advance the scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Default for SwipeGesture {
    /// Vertical swipe through the middle of a portrait screen
    fn default() -> Self {
        Self { x1: 500, y1: 1000, x2: 500, y2: 500 }
    }
}

/// Capture device backed by `adb` and the on-device uiautomator service.
///
/// Capturing a snapshot runs `uiautomator dump`, reads the dump file back
/// over `adb shell cat` and removes it from the device. Scrolling sends an
/// `input swipe` gesture.
pub struct AdbDevice {
    /// Path to the adb executable
    adb_path: String,

    /// Device serial to target, when more than one device is attached
    serial: Option<String>,

    /// Gesture sent by [`CaptureDevice::advance_scroll`]
    swipe: SwipeGesture,
}

impl AdbDevice {
    /// Create a device using `adb` from PATH and the default swipe gesture
    pub fn new() -> Self {
        Self { adb_path: "adb".to_string(), serial: None, swipe: SwipeGesture::default() }
    }

    /// Builder method: set the adb executable path
    pub fn adb_path(mut self, path: impl Into<String>) -> Self {
        self.adb_path = path.into();
        self
    }

    /// Builder method: target a specific device serial
    pub fn serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    /// Builder method: set the scroll swipe gesture
    pub fn swipe(mut self, gesture: SwipeGesture) -> Self {
        self.swipe = gesture;
        self
    }

    /// Run one adb command, prefixing `-s <serial>` when configured
    fn run_adb(&self, args: &[&str]) -> Result<Output> {
        let mut command = Command::new(&self.adb_path);
        if let Some(serial) = &self.serial {
            command.arg("-s").arg(serial);
        }
        command.args(args);

        log::debug!("running: {} {}", self.adb_path, args.join(" "));

        let output = command
            .output()
            .map_err(|e| ScrapeError::Capture(format!("failed to run {}: {}", self.adb_path, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScrapeError::Capture(format!(
                "adb {} exited with {}: {}",
                args.first().unwrap_or(&""),
                output.status,
                stderr.trim()
            )));
        }

        Ok(output)
    }
}

impl Default for AdbDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureDevice for AdbDevice {
    fn capture_snapshot(&mut self) -> Result<Snapshot> {
        self.run_adb(&["shell", "uiautomator", "dump", DEVICE_DUMP_PATH])?;

        let output = self.run_adb(&["shell", "cat", DEVICE_DUMP_PATH])?;
        let xml = String::from_utf8_lossy(&output.stdout).into_owned();

        // Best-effort cleanup; a stale dump file does not invalidate the capture
        if let Err(e) = self.run_adb(&["shell", "rm", DEVICE_DUMP_PATH]) {
            log::warn!("failed to remove {} from device: {}", DEVICE_DUMP_PATH, e);
        }

        Snapshot::from_xml(&xml)
    }

    fn advance_scroll(&mut self) -> Result<()> {
        let SwipeGesture { x1, y1, x2, y2 } = self.swipe;
        self.run_adb(&[
            "shell",
            "input",
            "swipe",
            &x1.to_string(),
            &y1.to_string(),
            &x2.to_string(),
            &y2.to_string(),
        ])?;

        Ok(())
    }
}
