//! Hand-maintained catalogue seed.

use super::ProductDraft;

struct SeedRow {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    color_indicator: &'static str,
    download_url: &'static str,
    featured: bool,
    popular: bool,
}

const SEED: [SeedRow; 5] = [
    SeedRow {
        name: "Rust Arcane External",
        description: "Get the rust arcane external loader.",
        category: "External Tool",
        color_indicator: "orange",
        download_url: "https://downloads.existence.invalid/rust-arcane-external",
        featured: true,
        popular: true,
    },
    SeedRow {
        name: "Rust Pro External",
        description: "Advanced rust external with premium features.",
        category: "External Tool",
        color_indicator: "red",
        download_url: "#",
        featured: true,
        popular: false,
    },
    SeedRow {
        name: "BO6 Engine",
        description: "Here you can download the loader for the bo6 external",
        category: "External Tool",
        color_indicator: "green",
        download_url: "https://downloads.existence.invalid/bo6-engine",
        featured: true,
        popular: false,
    },
    SeedRow {
        name: "NFA Account Loader",
        description: "NFA account loader for advanced gaming features.",
        category: "Loader",
        color_indicator: "blue",
        download_url: "https://downloads.existence.invalid/nfa-account-loader",
        featured: false,
        popular: true,
    },
    SeedRow {
        name: "Spoofer",
        description: "Spoofer download to bypass any anticheat.",
        category: "Spoofer",
        color_indicator: "indigo",
        download_url: "#",
        featured: true,
        popular: true,
    },
];

/// Seed drafts in catalogue order. Identifiers are assigned by the store.
pub fn seed_drafts() -> Vec<ProductDraft> {
    SEED.iter()
        .map(|row| ProductDraft {
            name: row.name.to_owned(),
            description: row.description.to_owned(),
            category: row.category.to_owned(),
            color_indicator: row.color_indicator.to_owned(),
            download_url: row.download_url.to_owned(),
            featured: row.featured,
            popular: row.popular,
        })
        .collect()
}
