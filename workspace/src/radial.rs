use std::{ fs, path::PathBuf };
use ndarray as nd;
use ndarray_npy::NpzWriter;
use hydrogen::{ nodes, radial, utils };

const NMAX: i32 = 4; // largest principal quantum number
const A0: f64 = 1.0; // length scale
const RMAX: f64 = 60.0; // extent of the radial grid, in units of A0

// compute radial functions and distributions for every (n, l) up to NMAX

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, RMAX * A0, 6001);
    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut npz = NpzWriter::new(fs::File::create(outdir.join("radial.npz"))?);
    npz.add_array("r", &r)?;

    for n in 1..=NMAX {
        for l in 0..n {
            let R = radial::radial(A0, n, l, &r)?;
            let P = radial::radial_distribution(A0, n, l, &r)?;
            let norm = utils::radial_norm(A0, n, l, RMAX * A0, 60001)?;
            let node_pos: nd::Array1<f64>
                = nodes::radial_nodes(A0, n, l, RMAX * A0, 60001)?.into();
            let rpeak = P.iter().zip(&r)
                .fold((0.0, 0.0), |best, (pk, rk)| {
                    if *pk > best.0 { (*pk, *rk) } else { best }
                })
                .1;
            println!(
                "n = {}, l = {}: norm = {:.6e}, most probable r = {:.3}, nodes at {:?}",
                n, l, norm, rpeak, node_pos.to_vec(),
            );
            npz.add_array(format!("R_{}_{}", n, l), &R)?;
            npz.add_array(format!("P_{}_{}", n, l), &P)?;
            npz.add_array(format!("nodes_{}_{}", n, l), &node_pos)?;
        }
    }
    npz.finish()?;
    Ok(())
}
