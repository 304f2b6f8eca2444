//! Values behind the dashboard stat widgets.

use crate::system::auth::Role;
use std::f64::consts::PI;

/// Radius of the SalesChart progress circle (SVG user units).
pub const PROGRESS_RADIUS: f64 = 45.0;

/// Colour category of a StatCard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatColor {
    #[default]
    Blue,
    Green,
    Orange,
    Purple,
    Red,
}

impl StatColor {
    pub fn class(&self) -> &'static str {
        match self {
            StatColor::Blue => "stat-card--blue",
            StatColor::Green => "stat-card--green",
            StatColor::Orange => "stat-card--orange",
            StatColor::Purple => "stat-card--purple",
            StatColor::Red => "stat-card--red",
        }
    }
}

/// Stroke geometry for a circular progress arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressArc {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl ProgressArc {
    /// `percentage` is expected in 0..=100 but is not clamped.
    pub fn new(percentage: f64) -> Self {
        let circumference = 2.0 * PI * PROGRESS_RADIUS;
        Self {
            radius: PROGRESS_RADIUS,
            circumference,
            dash_offset: circumference - (percentage / 100.0) * circumference,
        }
    }
}

/// Subtitle a WelcomeCard shows when the caller gives none.
pub fn welcome_subtitle(role: Role) -> &'static str {
    match role {
        Role::Admin => "Here's what's happening at your gym today.",
        Role::PersonalTrainer => "Here's an overview of your clients and sessions today.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_arc_quarter() {
        let arc = ProgressArc::new(25.0);
        let circumference = 2.0 * PI * 45.0;
        assert!((arc.circumference - circumference).abs() < 1e-9);
        assert!((arc.dash_offset - (circumference - 0.25 * circumference)).abs() < 1e-9);
    }

    #[test]
    fn test_progress_arc_bounds_not_clamped() {
        assert!((ProgressArc::new(0.0).dash_offset - ProgressArc::new(0.0).circumference).abs() < 1e-9);
        assert!(ProgressArc::new(100.0).dash_offset.abs() < 1e-9);
        assert!(ProgressArc::new(150.0).dash_offset < 0.0);
    }

    #[test]
    fn test_welcome_subtitle_per_role() {
        let pt: Role = "pt".parse().unwrap();
        assert_eq!(
            welcome_subtitle(pt),
            "Here's an overview of your clients and sessions today."
        );
        assert_ne!(welcome_subtitle(pt), welcome_subtitle(Role::Admin));
    }
}
