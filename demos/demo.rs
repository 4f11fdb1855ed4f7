// demos/demo.rs
use bs_greeks::analytics::{bs_analytic, price_and_greeks_with, OptionParams};
use bs_greeks::config::PricingConfig;
use bs_greeks::math_utils::Timer;

fn main() {
    tracing_subscriber::fmt::init();

    println!("Running bs-greeks Black-Scholes Demo\n");

    let s = 100.0;
    let k = 100.0;
    let t = 1.0;
    let sigma = 0.2;
    let r = 0.05;
    let params = OptionParams::new(s, k, t, sigma, r);

    // --- Prices and raw Greeks ---
    println!("--- Raw Greeks (per year / per unit) ---");
    let mut timer = Timer::new();
    timer.start();
    let raw = price_and_greeks_with(&params, &PricingConfig::default()).expect("Valid inputs");
    let elapsed = timer.elapsed_ms();

    println!("CALL price: {:.4}", raw.call_price);
    println!("PUT price:  {:.4}", raw.put_price);
    println!("{:<8} {:>12} {:>12}", "Greek", "Call", "Put");
    println!("{:<8} {:>12.4} {:>12.4}", "Delta", raw.delta_call, raw.delta_put);
    println!("{:<8} {:>12.4} {:>12.4}", "Gamma", raw.gamma, raw.gamma);
    println!("{:<8} {:>12.4} {:>12.4}", "Theta", raw.theta_call, raw.theta_put);
    println!("{:<8} {:>12.4} {:>12.4}", "Vega", raw.vega, raw.vega);
    println!("{:<8} {:>12.4} {:>12.4}", "Rho", raw.rho_call, raw.rho_put);
    println!("(evaluated in {:.4} ms)\n", elapsed);

    // --- Market convention ---
    println!("--- Market Greeks (per day / per vol point / per 1%) ---");
    let market = price_and_greeks_with(&params, &PricingConfig::market()).expect("Valid inputs");
    println!("Theta call/day: {:.6}", market.theta_call);
    println!("Vega per point: {:.6}", market.vega);
    println!("Rho per 1%:     {:.6}\n", market.rho_call);

    // --- Cross-check with the free functions ---
    println!("--- Free-function cross-check ---");
    let analytic_call = bs_analytic::bs_call_price(s, k, r, sigma, t);
    let analytic_put = bs_analytic::bs_put_price(s, k, r, sigma, t);
    println!("bs_call_price: {}", analytic_call);
    println!("bs_put_price:  {}", analytic_put);
    println!(
        "Put-call parity residual: {:e}\n",
        analytic_call - analytic_put - (s - k * (-r * t).exp())
    );

    // --- Boundary ---
    println!("--- At expiry ---");
    let expired = price_and_greeks_with(&OptionParams { time_to_maturity: 0.0, spot: 110.0, ..params }, &PricingConfig::default())
        .expect("Valid inputs");
    println!(
        "S=110 K=100 T=0 -> call {:.4}, put {:.4}, delta {:.1}, regime {:?}",
        expired.call_price, expired.put_price, expired.delta_call, expired.regime
    );
}
