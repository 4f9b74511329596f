use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Events emitted by the router, structured to ease integration with indexers
pub trait RouterEvents {
    fn swap(
        &self,
        pool: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out: i128,
        spot_price_after: i128,
    );

    fn batch_swap(
        &self,
        trader: Address,
        token_in: Address,
        token_out: Address,
        total_in: i128,
        total_out: i128,
    );
}

impl RouterEvents for Events {
    fn swap(
        &self,
        pool: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out: i128,
        spot_price_after: i128,
    ) {
        // topics
        // [
        //   "swap": Symbol,        // event identifier
        //   pool: Address,         // LP executing the swap
        //   token_in: Address,     // asset sent to the pool
        //   token_out: Address,    // asset received from the pool
        // ]
        //
        // body
        // [
        //   amount_in: i128,        // amount sent to the pool
        //   amount_out: i128,       // amount received from the pool
        //   spot_price_after: i128, // pool spot price after the swap
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "swap"), pool, token_in, token_out),
            (amount_in, amount_out, spot_price_after),
        );
    }

    fn batch_swap(
        &self,
        trader: Address,
        token_in: Address,
        token_out: Address,
        total_in: i128,
        total_out: i128,
    ) {
        // topics
        // [
        //   "batch_swap": Symbol,  // event identifier
        //   token_in: Address,     // asset sold by the trader (native marker included)
        //   token_out: Address,    // asset bought by the trader (native marker included)
        //   trader: Address,
        // ]
        //
        // body
        // [
        //   total_in: i128,   // amount spent by the trader
        //   total_out: i128,  // amount received by the trader
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "batch_swap"), token_in, token_out, trader),
            (total_in, total_out),
        );
    }
}
