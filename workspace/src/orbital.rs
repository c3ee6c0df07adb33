use std::{ fs, path::PathBuf };
use anyhow::Context;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use hydrogen::render::RenderConfig;

// render the planar probability density of a single state
//
// usage: orbital [config.json]
//
// the config file holds a (partial) `RenderConfig`; omitted fields take their
// defaults (ground state, a0 = 0.7, x in [-500, 500], 1000 points, square
// viewport)

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config: RenderConfig = match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("couldn't read config file {}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("malformed config file {}", path))?
        },
        None => RenderConfig::default(),
    };
    let frame = config.render()?;
    let ((i, j), pmax) = frame.peak();
    println!("{}", config.state);
    println!("grid: {:?}", frame.grid.dim());
    println!(
        "peak density {:.3e} at (x, y) = ({:.3}, {:.3})",
        pmax, frame.grid.x[[i, j]], frame.grid.y[[i, j]],
    );
    println!("probability in slice: {:.6e}", frame.slice_probability());

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let state = config.state;
    let outfile = outdir.join(
        format!("orbital_{}_{}_{}.npz", state.n(), state.l(), state.m()));
    let mut npz = NpzWriter::new(fs::File::create(&outfile)?);
    npz.add_array("x", &frame.grid.xs())?;
    npz.add_array("y", &frame.grid.ys())?;
    npz.add_array("nlm", &nd::array![state.n(), state.l(), state.m()])?;
    npz.add_array("a0", &nd::array![config.scale()?.value()])?;
    npz.add_array("psi", &frame.psi)?;
    npz.add_array("density", &frame.density)?;
    npz.add_array("intensity", &frame.intensity())?;
    npz.finish()?;
    log::info!("wrote {}", outfile.display());
    Ok(())
}
