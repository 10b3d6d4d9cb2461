//! Offline helper for BNO055 axis remap settings.
//!
//! Prints the AXIS_MAP_CONFIG and AXIS_MAP_SIGN register values for a mount
//! direction or an explicit order/signs pair, and rejects left-handed or
//! duplicate-axis combinations before they reach a robot.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hardware::imu::{AxesOrder, AxesSigns, AxisDirection, AxisRemap};
use strum::IntoEnumIterator;
use tracing::info;

/// BNO055 axis remap calculator
#[derive(Parser, Debug)]
#[command(name = "imu_axes")]
#[command(about = "Compute BNO055 axis remap register values")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Registers that make +Z face the given direction
    Direction {
        /// Direction the remapped +Z axis should face
        #[arg(value_enum)]
        direction: AxisDirection,
    },

    /// Registers for an explicit axes order and signs
    Remap {
        /// Axes order (e.g. zyx)
        #[arg(value_enum)]
        order: AxesOrder,

        /// Axes signs (e.g. npp)
        #[arg(value_enum)]
        signs: AxesSigns,
    },

    /// List every valid order/signs combination
    Table,
}

fn print_remap(order: AxesOrder, signs: AxesSigns, remap: &AxisRemap) {
    println!(
        "{order} {signs}: AXIS_MAP_CONFIG={:#04x} AXIS_MAP_SIGN={:#04x}",
        remap.axis_map_config, remap.axis_map_sign
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match args.command {
        Command::Direction { direction } => {
            let (order, signs) = direction.z_axis_remap();
            info!("{direction} maps to order {order} with signs {signs}");
            let remap = AxisRemap::compute(order, signs)?;
            print_remap(order, signs, &remap);
        }
        Command::Remap { order, signs } => {
            let remap = AxisRemap::compute(order, signs)?;
            print_remap(order, signs, &remap);
        }
        Command::Table => {
            for order in AxesOrder::iter().filter(|o| o.is_permutation()) {
                for signs in AxesSigns::iter() {
                    if let Ok(remap) = AxisRemap::compute(order, signs) {
                        print_remap(order, signs, &remap);
                    }
                }
            }
        }
    }

    Ok(())
}
