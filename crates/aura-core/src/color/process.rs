use ndarray::Zip;
use serde::{Deserialize, Serialize};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::frame::{ColorFrame, Frame};

/// Color channel an aura is tinted into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuraChannel {
    #[default]
    Red,
    Green,
    Blue,
}

impl std::fmt::Display for AuraChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// Compute luminance from a `ColorFrame` using ITU-R BT.601 weights.
pub fn luminance(color: &ColorFrame) -> Frame {
    let data = Zip::from(&color.red.data)
        .and(&color.green.data)
        .and(&color.blue.data)
        .map_collect(|&r, &g, &b| LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b);
    Frame::new(data)
}

/// Apply a processing function to each channel of a color frame independently.
pub fn process_color<F>(color: &ColorFrame, mut process_fn: F) -> ColorFrame
where
    F: FnMut(&Frame) -> Frame,
{
    ColorFrame {
        red: process_fn(&color.red),
        green: process_fn(&color.green),
        blue: process_fn(&color.blue),
    }
}

/// Place a single-channel frame into one color channel, zeroing the other two.
pub fn tint(frame: &Frame, channel: AuraChannel) -> ColorFrame {
    let blank = Frame::zeros(frame.height(), frame.width());
    match channel {
        AuraChannel::Red => from_channels(frame.clone(), blank.clone(), blank),
        AuraChannel::Green => from_channels(blank.clone(), frame.clone(), blank),
        AuraChannel::Blue => from_channels(blank.clone(), blank, frame.clone()),
    }
}

/// Create a ColorFrame from three separate mono frames.
pub fn from_channels(red: Frame, green: Frame, blue: Frame) -> ColorFrame {
    ColorFrame { red, green, blue }
}
