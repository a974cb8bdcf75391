// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use std::env;
use tez_core::logging::install_log_bridge;
use tez_core::{
    tez_log_info, tez_log_warning, tez_soft_assert, Array, DynamicArray, LogConfig, LogSystem,
    Vector2, Vector3, Vector4, ENGINE_VERSION,
};

fn load_config() -> Result<LogConfig> {
    match env::args().nth(1) {
        Some(path) => LogConfig::load(&path)
            .with_context(|| format!("failed to load log configuration from '{path}'")),
        None => Ok(LogConfig::default()),
    }
}

/// Default `env_logger` filter when the bridge is off; `RUST_LOG` still wins.
fn fallback_filter(config: &LogConfig) -> &'static str {
    config.log_crate_level.as_str()
}

fn safe_ratio(numerator: f32, denominator: f32) -> f32 {
    tez_soft_assert!(denominator != 0.0, "Division by zero in safe_ratio", 0.0);
    numerator / denominator
}

fn run_demo() {
    let velocity = Vector2::new(3.0_f32, 4.0);
    tez_log_info!("velocity {velocity:.2} has speed {:.2}", velocity.length());

    let normal = Vector3::<f32>::X.cross(Vector3::Y);
    let point = Vector4::from_vector3(normal, 1.0);
    tez_log_info!("surface normal {normal}, homogeneous point {point}");

    let mut frame_times: Array<f32, 4> = Array::default();
    frame_times.fill_with(|i| 16.0 + i as f32 * 0.5);
    tez_log_info!(
        "frame times {:?}, out of range read {}",
        frame_times.as_slice(),
        frame_times.value_at(9)
    );

    let mut queue: DynamicArray<&str> = ["load", "simulate"].into_iter().collect();
    queue.push_back("render");
    if let Err(rejected) = queue.insert(10, "present") {
        tez_log_warning!("could not schedule '{rejected}'");
    }
    log::info!("{} stages queued, first is {:?}", queue.len(), queue.front());

    tez_log_info!("safe_ratio(1, 0) = {}", safe_ratio(1.0, 0.0));
}

fn main() -> Result<()> {
    let config = load_config()?;
    let system = LogSystem::initialize(&config)?;

    if config.bridge_log_crate {
        install_log_bridge(system, config.log_crate_level)?;
    } else {
        use env_logger::{Builder, Env};

        Builder::from_env(Env::default().default_filter_or(fallback_filter(&config)))
            .init();
    }

    tez_log_info!("Tez engine core {ENGINE_VERSION}");
    run_demo();

    log::debug!("releasing {} log channel(s)", system.channel_count());
    system.shutdown();
    Ok(())
}
