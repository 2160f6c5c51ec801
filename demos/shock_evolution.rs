use ndarray as nd;
use snrshock::{ Medium, PhysicalParameters, ShockModel };

// tabulate the forward shock of a remnant in both ambient media

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    const EJECTA_MASS: f64 = 1.0; // M☉
    const ENERGY: f64 = 1.0; // 10⁵¹ erg
    const DENSITY: f64 = 1.0; // cm⁻³
    const REF_RADIUS: f64 = 9.6; // pc
    const SLOPE: u32 = 9;

    let ages: nd::Array1<f64> = nd::Array1::logspace(10.0, 1.0, 4.0, 13);
    for medium in [Medium::Uniform, Medium::Wind] {
        let params = PhysicalParameters::new(
            EJECTA_MASS, ENERGY, DENSITY, REF_RADIUS, SLOPE, medium).unwrap();
        let model = ShockModel::new(params).unwrap();
        let scales = model.scales();
        println!(
            "{medium} medium: R_ch = {:.3} pc, t_ch = {:.1} yr, t_tr = {:.1} yr",
            scales.length_pc(),
            scales.time_yr(),
            model.transition_age(),
        );
        println!("{:>10} {:>10} {:>10} {:>8}", "age (yr)", "R (pc)", "v (km/s)", "m");
        let evo = model.evaluate(&ages).unwrap();
        for state in evo.iter() {
            println!(
                "{:>10.1} {:>10.4} {:>10.1} {:>8.4}",
                state.age, state.radius, state.velocity, state.m,
            );
        }
        println!();
    }
}
