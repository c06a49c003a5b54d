// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use velograph_catalog::{Category, MaterialGroup};
use velograph_client::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use velograph_fit::RidingStyle;
use velograph_state::{Language, Theme};

/// Environment variable naming the state directory.
pub(crate) const STATE_DIR_ENV: &str = "VELOGRAPH_STATE_DIR";

/// Search, draw, fit and compare bicycle frame geometries.
#[derive(Debug, Parser)]
#[command(name = "velograph", version, about)]
pub(crate) struct Cli {
    /// Catalog backend base URL.
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub(crate) api_url: String,

    /// Directory holding the comparison list and preferences.
    #[arg(long, global = true, env = STATE_DIR_ENV, default_value = ".velograph")]
    pub(crate) state_dir: PathBuf,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Search the catalog.
    #[command(subcommand)]
    Search(SearchCommand),
    /// Show one definition or geometry.
    #[command(subcommand)]
    Show(ShowCommand),
    /// Draw a frame as SVG.
    Draw(DrawArgs),
    /// Saddle height, cockpit reach and stack/reach verdict for a rider.
    Fit(FitArgs),
    /// Manage the comparison list.
    #[command(subcommand)]
    Compare(CompareCommand),
    /// Show or change preferences.
    #[command(subcommand)]
    Prefs(PrefsCommand),
    /// Check that the backend is reachable.
    Health,
}

#[derive(Debug, Args)]
pub(crate) struct Filters {
    /// Category filter.
    #[arg(long)]
    pub(crate) category: Option<Category>,
    /// Material filter.
    #[arg(long)]
    pub(crate) material: Option<MaterialGroup>,
    /// One-based page.
    #[arg(long, default_value_t = 1)]
    pub(crate) page: u32,
    /// Results per page (1-100).
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub(crate) size: u32,
}

#[derive(Debug, Subcommand)]
pub(crate) enum SearchCommand {
    /// Sizes closest to a target stack and reach.
    ///
    /// Omitted targets are taken from the last saved search.
    Geometry {
        /// Target stack in millimeters.
        #[arg(long)]
        stack: Option<f64>,
        /// Target reach in millimeters.
        #[arg(long)]
        reach: Option<f64>,
        #[command(flatten)]
        filters: Filters,
    },
    /// Frame definitions by brand or model.
    Keyword {
        /// Search text; omit to browse.
        query: Option<String>,
        #[command(flatten)]
        filters: Filters,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ShowCommand {
    /// A frame definition with its sizes and product variants.
    Definition {
        /// Definition identifier.
        id: u64,
    },
    /// A single geometry.
    Spec {
        /// Geometry identifier.
        id: u64,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["id", "file"])))]
pub(crate) struct DrawArgs {
    /// Geometry identifier to fetch.
    #[arg(long)]
    pub(crate) id: Option<u64>,
    /// Geometry JSON file to read instead of fetching.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Canvas width in pixels.
    #[arg(long, value_parser = parse_pixels)]
    pub(crate) width: Option<f64>,
    /// Canvas height in pixels.
    #[arg(long, value_parser = parse_pixels)]
    pub(crate) height: Option<f64>,
    /// Leave the wheels out.
    #[arg(long)]
    pub(crate) no_wheels: bool,
    /// Frame color as listing text, e.g. "matte black" or "#10b981".
    #[arg(long)]
    pub(crate) color: Option<String>,
    /// Overlay a target stack (needs --fit-reach).
    #[arg(long, requires = "fit_reach")]
    pub(crate) fit_stack: Option<f64>,
    /// Overlay a target reach (needs --fit-stack).
    #[arg(long, requires = "fit_stack")]
    pub(crate) fit_reach: Option<f64>,
    /// Output file; stdout if omitted.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct FitArgs {
    /// Inseam in centimeters.
    #[arg(long)]
    pub(crate) inseam: Option<f64>,
    /// Torso length in centimeters.
    #[arg(long)]
    pub(crate) torso: Option<f64>,
    /// Arm length in centimeters.
    #[arg(long)]
    pub(crate) arm: Option<f64>,
    /// Riding style: aggressive, balanced or comfort.
    #[arg(long, default_value = "balanced")]
    pub(crate) style: RidingStyle,
    /// Judge this geometry (fetched by identifier).
    #[arg(long, conflicts_with_all = ["stack", "reach"])]
    pub(crate) spec: Option<u64>,
    /// Frame stack in millimeters.
    #[arg(long)]
    pub(crate) stack: Option<f64>,
    /// Frame reach in millimeters.
    #[arg(long)]
    pub(crate) reach: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CompareCommand {
    /// Fetch a geometry and add it to the list.
    Add {
        /// Geometry identifier.
        id: u64,
    },
    /// Remove a geometry from the list.
    Remove {
        /// Geometry identifier.
        id: u64,
    },
    /// Print the list side by side.
    List,
    /// Empty the list.
    Clear,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

impl ThemeChoice {
    pub(crate) fn resolve(self, current: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Toggle => current.toggled(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum PrefsCommand {
    /// Print the current preferences.
    Show,
    /// Set the theme.
    Theme {
        /// `light`, `dark` or `toggle`.
        #[arg(value_enum)]
        choice: ThemeChoice,
    },
    /// Set the language.
    Language {
        /// `en` or `pl`.
        language: Language,
    },
}

fn parse_pixels(text: &str) -> Result<f64, String> {
    match text.parse::<f64>() {
        Ok(px) if px.is_finite() && px > 0.0 => Ok(px),
        Ok(_) => Err(String::from("must be a positive number of pixels")),
        Err(err) => Err(err.to_string()),
    }
}
