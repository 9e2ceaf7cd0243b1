// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.
pub mod config;
pub mod engine;
pub mod errors;
pub mod server;
pub mod telemetry;
