// demos/scenario_sweep.rs
use bs_greeks::analytics::{price_and_greeks, OptionKind, Position};
use bs_greeks::config::PricingConfig;
use bs_greeks::scenario::{expiry_pnl, pnl_grid, price_grid_over, ScenarioRange};

fn print_matrix(title: &str, spots: &[f64], vols: &[f64], values: &ndarray::Array2<f64>) {
    println!("{}", title);
    print!("{:>8}", "vol\\S");
    for s in spots {
        print!("{:>9.2}", s);
    }
    println!();
    for (j, v) in vols.iter().enumerate() {
        print!("{:>8.2}", v);
        for i in 0..spots.len() {
            print!("{:>9.2}", values[[i, j]]);
        }
        println!();
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt::init();

    let (spot, strike, t, sigma, r) = (100.0, 100.0, 1.0, 0.2, 0.05);

    let spots = ScenarioRange::around(spot, 0.2, 7).expect("Valid spot axis");
    let vols = ScenarioRange::around(sigma, 0.5, 5).expect("Valid vol axis");

    let grid = price_grid_over(&spots, &vols, strike, t, r, &PricingConfig::default())
        .expect("Valid grid");

    print_matrix("Call prices", &grid.spots, &grid.vols, &grid.call);
    print_matrix("Put prices", &grid.spots, &grid.vols, &grid.put);

    let base = price_and_greeks(spot, strike, t, sigma, r).expect("Valid inputs");
    let premium = base.call_price.min(base.put_price);
    println!("Purchase price: {:.4}\n", premium);

    let long_call = pnl_grid(&grid, Position::long(OptionKind::Call), premium).expect("Valid premium");
    print_matrix("Long call PnL", &grid.spots, &grid.vols, &long_call);

    let at_expiry = expiry_pnl(&grid.spots, strike, premium).expect("Valid premium");
    println!("{:>9} {:>10} {:>10}", "Spot", "Call PnL", "Put PnL");
    for ((s, c), p) in at_expiry.spots.iter().zip(&at_expiry.call).zip(&at_expiry.put) {
        println!("{:>9.2} {:>10.2} {:>10.2}", s, c, p);
    }
}
