use clap::{Parser, Subcommand};
use cs_core::Real;
use cs_plan::{BasisDef, Plan, PlanResult};
use cs_poly::{AllCoeffs, Dim2, HighOrderCoeffs, MotionDerivative, PolynomialSegment, QuinticSegment};
use cs_spline::ComSpline;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cs-cli")]
#[command(about = "COM spline CLI - inspect piecewise-polynomial COM trajectories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate plan file syntax and structure
    Validate {
        /// Path to the plan file (YAML, or JSON with a .json extension)
        plan_path: PathBuf,
    },
    /// List the segments a plan expands to
    Segments {
        /// Path to the plan file
        plan_path: PathBuf,
    },
    /// Sample the trajectory state on a uniform time grid
    Sample {
        /// Path to the plan file
        plan_path: PathBuf,
        /// Sample period in seconds
        #[arg(long, default_value_t = 0.05)]
        dt: Real,
    },
    /// Print the Jacobian row of one motion derivative
    Jacobian {
        /// Path to the plan file
        plan_path: PathBuf,
        /// Global time in seconds
        #[arg(long)]
        t: Real,
        /// Motion derivative (pos, vel, acc, jerk)
        #[arg(long, default_value = "pos")]
        deriv: MotionDerivative,
        /// Spatial dimension (x, y)
        #[arg(long, default_value = "x")]
        dim: Dim2,
        /// Print every entry instead of the non-zero ones only
        #[arg(long)]
        dense: bool,
    },
}

fn main() -> PlanResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { plan_path } => cmd_validate(&plan_path),
        Commands::Segments { plan_path } => with_spline(&plan_path, SegmentsCmd),
        Commands::Sample { plan_path, dt } => with_spline(&plan_path, SampleCmd { dt }),
        Commands::Jacobian {
            plan_path,
            t,
            deriv,
            dim,
            dense,
        } => with_spline(
            &plan_path,
            JacobianCmd {
                t,
                deriv,
                dim,
                dense,
            },
        ),
    }
}

/// A command that runs against a spline of whatever basis the plan names.
trait SplineCmd {
    fn run<S: PolynomialSegment>(self, plan: &Plan, spline: &ComSpline<S>) -> PlanResult<()>;
}

fn with_spline(plan_path: &Path, cmd: impl SplineCmd) -> PlanResult<()> {
    let plan = cs_plan::load(plan_path)?;
    match plan.basis {
        BasisDef::All => {
            let spline = plan.build_spline::<QuinticSegment<AllCoeffs>>()?;
            cmd.run(&plan, &spline)
        }
        BasisDef::HighOrder => {
            let spline = plan.build_spline::<QuinticSegment<HighOrderCoeffs>>()?;
            cmd.run(&plan, &spline)
        }
    }
}

fn cmd_validate(plan_path: &Path) -> PlanResult<()> {
    println!("Validating plan: {}", plan_path.display());
    let plan = cs_plan::load(plan_path)?;
    println!(
        "✓ Plan is valid ({} phases, {} segments)",
        plan.phases.len(),
        cs_plan::segment_count(&plan).map_or_else(|| "?".to_string(), |n| n.to_string())
    );
    Ok(())
}

struct SegmentsCmd;

impl SplineCmd for SegmentsCmd {
    fn run<S: PolynomialSegment>(self, plan: &Plan, spline: &ComSpline<S>) -> PlanResult<()> {
        if let Some(name) = &plan.name {
            println!("Plan: {name}");
        }
        println!(
            "{} segments, {:.4} s total, {} free coefficients",
            spline.segments()?.len(),
            spline.total_duration()?,
            spline.total_free_coeffs()?
        );
        let config = spline.config();
        println!(
            "reaction time {:.3} s, {} segment(s) per step",
            config.reaction_time, config.segments_per_step
        );

        let layout = spline.layout()?;
        let mut t_start = 0.0;
        for segment in spline.segments()? {
            let phase = spline.phase_of(segment.id())?;
            let step = segment
                .step()
                .map_or_else(|| "-".to_string(), |s| s.to_string());
            let block = layout.block(segment.id());
            println!(
                "  {:>3}  phase {:>2} {:<6}  t=[{:.4}, {:.4}]  step {:>2}  coeffs {}..{}",
                segment.id(),
                segment.phase(),
                format!("{:?}", phase.kind).to_lowercase(),
                t_start,
                t_start + segment.duration(),
                step,
                block.start,
                block.end
            );
            t_start += segment.duration();
        }
        Ok(())
    }
}

struct SampleCmd {
    dt: Real,
}

impl SplineCmd for SampleCmd {
    fn run<S: PolynomialSegment>(self, _plan: &Plan, spline: &ComSpline<S>) -> PlanResult<()> {
        println!("t,px,py,vx,vy,ax,ay,jx,jy");
        for (t, s) in spline.sample(self.dt)? {
            println!(
                "{t:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
                s.p.x, s.p.y, s.v.x, s.v.y, s.a.x, s.a.y, s.j.x, s.j.y
            );
        }
        Ok(())
    }
}

struct JacobianCmd {
    t: Real,
    deriv: MotionDerivative,
    dim: Dim2,
    dense: bool,
}

impl SplineCmd for JacobianCmd {
    fn run<S: PolynomialSegment>(self, _plan: &Plan, spline: &ComSpline<S>) -> PlanResult<()> {
        let owner = spline.segment_id_at(self.t)?;
        let t_local = spline.local_time(self.t)?;
        let row = spline.jacobian(self.t, self.deriv, self.dim)?;
        let layout = spline.layout()?;

        println!(
            "d{}/{} at t={} (segment {}, local t={:.6}), {} entries",
            self.deriv,
            self.dim,
            self.t,
            owner,
            t_local,
            row.len()
        );
        for (i, &value) in row.iter().enumerate() {
            if self.dense || value != 0.0 {
                let (segment, dim, slot) = layout.locate(i)?;
                println!("  [{i:>4}] seg {segment} {dim} slot {slot}: {value:.9}");
            }
        }
        Ok(())
    }
}
