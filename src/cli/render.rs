// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the render commands.
//!
//! ```text
//! $ ub render-template /etc/confluent/docker/log4j.properties.template
//! $ ub render-properties /etc/confluent/docker/kafka-propertiesSpec.json
//! $ ub render-properties-prefix KAFKA
//! ```

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct RenderTemplateArgs {
    /// Template file.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct RenderPropertiesArgs {
    /// JSON config spec file.
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct RenderPrefixArgs {
    /// Prefix of the variables to render, without the trailing separator.
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}
