use zeta_family::*;

fn main() {
    // -- Single values --
    println!("=== Single values (f64) ===");
    for s in [2.0_f64, 0.5, -2.5, 30.0] {
        println!("zeta({s})   = {:e}", riemann_zeta(s));
        println!("eta({s})    = {:e}", dirichlet_eta(s));
        println!("lambda({s}) = {:e}", dirichlet_lambda(s));
        println!("beta({s})   = {:e}", catalan_beta(s));
    }

    // -- Star functions keep the digits that f(s) - 1 would lose --
    println!("\n=== Star functions at s = 40 ===");
    println!("zeta*(40) = {:e}", riemann_zeta_star(40.0_f64));
    println!("zeta(40)  = {}", riemann_zeta(40.0_f64));
    println!("beta*(40) = {:e}", catalan_beta_star(40.0_f64));

    // -- Integer arguments --
    println!("\n=== Integer arguments ===");
    for n in [-7, -3, 0, 1, 3] {
        println!("zeta({n}) = {:e}", riemann_zeta_int::<f64>(n));
    }
    println!("beta(-6) = {}  (E(6)/2)", catalan_beta_int::<f64>(-6));

    // -- Pole and overflow reporting --
    println!("\n=== Status ===");
    let pole = riemann_zeta_raw(1.0_f64);
    println!("zeta(1)      = {:e}  {:?}", pole.value, pole.status);
    let big = dirichlet_eta_raw(-300.5_f64);
    println!("eta(-300.5)  = {:e}  {:?}", big.value, big.status);

    // -- Bernoulli and Euler numbers --
    println!("\n=== Bernoulli / Euler ===");
    let b = bernoulli_number_seq::<f64>(0, 13).unwrap();
    for (n, v) in b.iter().enumerate() {
        println!("  B({n}) = {v}");
    }
    println!("  B(200) = {:e}", bernoulli_number::<f64>(200));
    println!("  E(100) = {:e}", euler_number::<f64>(100));
    println!("  B(300) = {:e}  {:?}", bernoulli_number::<f64>(300), bernoulli_number_raw::<f64>(300).status);

    // -- f32 support --
    println!("\n=== f32 support ===");
    println!("zeta(3) = {} (f32)", riemann_zeta(3.0_f32));
    let r = euler_number_raw::<f32>(50);
    println!("E(50)   = {:e} (f32)  {:?}", r.value, r.status);
}
