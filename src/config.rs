// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::runtime::{ColorMode, ColorScheme};
use crate::shape::DEFAULT_HEART_POINTS;

pub const DEFAULT_CAPTION: &str = "<coded with love/>";

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "heartfall", version, disable_version_flag = true, about)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "fps",
        default_value_t = 60.0,
        help_heading = "PERFORMANCE",
        help = "Target FPS (min 1 max 240)"
    )]
    pub fps: f64,

    #[arg(
        long = "duration",
        allow_negative_numbers = true,
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,

    #[arg(
        short = 'n',
        long = "points",
        default_value_t = DEFAULT_HEART_POINTS,
        help_heading = "APPEARANCE",
        help = "Number of heart outline segments (min 8 max 2000)"
    )]
    pub points: usize,

    #[arg(
        short = 'm',
        long = "caption",
        default_value = DEFAULT_CAPTION,
        help_heading = "APPEARANCE",
        help = "Caption revealed once the heart is nearly complete"
    )]
    pub caption: String,

    #[arg(
        short = 'c',
        long = "color",
        default_value = "red",
        help_heading = "APPEARANCE",
        help = "Color theme (see --list-colors)"
    )]
    pub color: String,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (allowed: 0,16,8/256,24/32). Default: 24-bit if supported (COLORTERM), else 8-bit"
    )]
    pub colormode: Option<u16>,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the random generator for a repeatable animation"
    )]
    pub seed: Option<u64>,

    #[arg(
        short = 's',
        long = "screensaver",
        help_heading = "GENERAL",
        help = "Screensaver mode (exit on keypress)"
    )]
    pub screensaver: bool,

    #[arg(
        long = "log-file",
        value_name = "PATH",
        help_heading = "LOGGING",
        help = "Write log output to PATH (the screen is never logged to)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        short = 'V',
        long = "verbose",
        action = clap::ArgAction::Count,
        help_heading = "LOGGING",
        help = "Raise log verbosity (-V info, -VV debug, -VVV trace)"
    )]
    pub verbose: u8,

    #[arg(
        long = "check-bitcolor",
        help_heading = "HELP",
        help = "Print detected terminal color capability and exit"
    )]
    pub check_bitcolor: bool,

    #[arg(
        long = "list-colors",
        help_heading = "HELP",
        help = "List available color themes and exit"
    )]
    pub list_colors: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

/// Validated run settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub fps: f64,
    pub duration: Option<f64>,
    pub points: usize,
    pub caption: String,
    pub color: ColorScheme,
    pub color_mode: ColorMode,
    pub seed: Option<u64>,
    pub screensaver: bool,
}

fn require_f64_range(name: &'static str, v: f64, min: f64, max: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(Error::InvalidOption {
            name,
            value: v.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if v < min || v > max {
        return Err(Error::InvalidOption {
            name,
            value: v.to_string(),
            reason: format!("min {} max {}", min, max),
        });
    }
    Ok(v)
}

fn require_usize_range(name: &'static str, v: usize, min: usize, max: usize) -> Result<usize> {
    if v < min || v > max {
        return Err(Error::InvalidOption {
            name,
            value: v.to_string(),
            reason: format!("min {} max {}", min, max),
        });
    }
    Ok(v)
}

pub fn detect_color_mode_auto() -> ColorMode {
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorMode::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term == "dumb" {
        return ColorMode::Mono;
    }

    ColorMode::Color256
}

impl Args {
    pub fn color_mode(&self) -> Result<ColorMode> {
        match self.colormode {
            Some(bits) => ColorMode::from_bits(bits).ok_or_else(|| Error::InvalidOption {
                name: "--colormode",
                value: bits.to_string(),
                reason: "allowed: 0,16,8,256,24,32".to_string(),
            }),
            None => Ok(detect_color_mode_auto()),
        }
    }

    pub fn validate(&self) -> Result<Settings> {
        let fps = require_f64_range("--fps", self.fps, 1.0, 240.0)?;
        let duration = match self.duration {
            Some(s) if !s.is_finite() => {
                return Err(Error::InvalidOption {
                    name: "--duration",
                    value: s.to_string(),
                    reason: "must be a finite number".to_string(),
                })
            }
            Some(s) if s > 0.0 => Some(require_f64_range("--duration", s, 0.1, 86400.0)?),
            _ => None,
        };
        let points = require_usize_range("--points", self.points, 8, 2000)?;

        Ok(Settings {
            fps,
            duration,
            points,
            caption: self.caption.clone(),
            color: self.color.parse()?,
            color_mode: self.color_mode()?,
            seed: self.seed,
            screensaver: self.screensaver,
        })
    }
}

pub fn print_list_colors() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE COLOR THEMES:\x1b[0m");
        println!("\x1b[2mNOTE: Use only the VALUE (left side) with --color.\x1b[0m");
    } else {
        println!("AVAILABLE COLOR THEMES:");
        println!("NOTE: Use only the VALUE (left side) with --color.");
    }
    println!();
    println!("VALUE        DESCRIPTION");
    for scheme in ColorScheme::ALL {
        println!("{:<12} {}", scheme.name(), scheme.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("heartfall").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_validate() {
        let s = parse(&["--colormode", "24"]).validate().unwrap();
        assert_eq!(s.fps, 60.0);
        assert_eq!(s.points, 200);
        assert_eq!(s.duration, None);
        assert_eq!(s.caption, DEFAULT_CAPTION);
        assert_eq!(s.color, ColorScheme::Red);
        assert_eq!(s.color_mode, ColorMode::TrueColor);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = parse(&["--fps", "500"]).validate().unwrap_err();
        assert_eq!(err.to_string(), "failed to apply --fps 500 (min 1 max 240)");

        assert!(parse(&["--points", "3"]).validate().is_err());
        assert!(parse(&["--duration", "0.01"]).validate().is_err());
        assert!(parse(&["--colormode", "7"]).validate().is_err());
        assert!(matches!(
            parse(&["--color", "plaid"]).validate(),
            Err(Error::UnknownColor(_))
        ));
    }

    #[test]
    fn non_positive_duration_disables_the_limit() {
        let s = parse(&["--duration", "0", "--colormode", "0"])
            .validate()
            .unwrap();
        assert_eq!(s.duration, None);
        let s = parse(&["--duration", "2.5", "--colormode", "0"])
            .validate()
            .unwrap();
        assert_eq!(s.duration, Some(2.5));
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-VV"]).verbose, 2);
    }
}
