use soroban_sdk::{panic_with_error, Env, I256};

use crate::types::error::RouterError;

// Fixed-point one, 18 fractional digits
pub const BONE: i128 = 1_000_000_000_000_000_000;
pub const MIN_BPOW_BASE: i128 = 1;
pub const MAX_BPOW_BASE: i128 = 2 * BONE - 1;
pub const BPOW_PRECISION: i128 = BONE / 10_000_000_000;

// Calculate the spot price of token_out in terms of token_in, fee included
//
// spot = (Bi / Wi) / (Bo / Wo) * 1 / (1 - fee)
//
// # Arguments
//
// * `balance_in` - Pool reserve of the selling token
// * `weight_in` - Denormalized weight of the selling token
// * `balance_out` - Pool reserve of the buying token
// * `weight_out` - Denormalized weight of the buying token
// * `swap_fee` - Pool swap fee fraction
pub fn calc_spot_price(
    e: &Env,
    balance_in: i128,
    weight_in: i128,
    balance_out: i128,
    weight_out: i128,
    swap_fee: i128,
) -> i128 {
    check_reserves(e, balance_in, weight_in, balance_out, weight_out, swap_fee);
    let numer = bdiv(e, balance_in, weight_in);
    let denom = bdiv(e, balance_out, weight_out);
    let ratio = bdiv(e, numer, denom);
    let scale = bdiv(e, BONE, bsub(e, BONE, swap_fee));
    bmul(e, ratio, scale)
}

// Calculate the amount of token_out received for an exact amount of token_in
//
// amount_out = Bo * (1 - (Bi / (Bi + amount_in * (1 - fee))) ^ (Wi / Wo))
//
// # Arguments
//
// * `balance_in` - Pool reserve of the selling token
// * `weight_in` - Denormalized weight of the selling token
// * `balance_out` - Pool reserve of the buying token
// * `weight_out` - Denormalized weight of the buying token
// * `amount_in` - Exact amount to sell
// * `swap_fee` - Pool swap fee fraction
//
// # Panics
//
// Panics if reserves or weights are empty, or the fee is out of range
pub fn calc_out_given_in(
    e: &Env,
    balance_in: i128,
    weight_in: i128,
    balance_out: i128,
    weight_out: i128,
    amount_in: i128,
    swap_fee: i128,
) -> i128 {
    check_reserves(e, balance_in, weight_in, balance_out, weight_out, swap_fee);
    if amount_in < 0 {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
    let weight_ratio = bdiv(e, weight_in, weight_out);
    let adjusted_in = bmul(e, amount_in, bsub(e, BONE, swap_fee));
    let y = bdiv(e, balance_in, badd(e, balance_in, adjusted_in));
    let foo = bpow(e, y, weight_ratio);
    let bar = bsub(e, BONE, foo);
    bmul(e, balance_out, bar)
}

// Calculate the amount of token_in required to receive an exact amount of token_out
//
// amount_in = Bi * ((Bo / (Bo - amount_out)) ^ (Wo / Wi) - 1) / (1 - fee)
//
// # Arguments
//
// * `balance_in` - Pool reserve of the selling token
// * `weight_in` - Denormalized weight of the selling token
// * `balance_out` - Pool reserve of the buying token
// * `weight_out` - Denormalized weight of the buying token
// * `amount_out` - Exact amount to buy
// * `swap_fee` - Pool swap fee fraction
//
// # Panics
//
// Panics if `amount_out` is not below the pool reserve of token_out
pub fn calc_in_given_out(
    e: &Env,
    balance_in: i128,
    weight_in: i128,
    balance_out: i128,
    weight_out: i128,
    amount_out: i128,
    swap_fee: i128,
) -> i128 {
    check_reserves(e, balance_in, weight_in, balance_out, weight_out, swap_fee);
    if amount_out < 0 {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
    if amount_out >= balance_out {
        panic_with_error!(e, RouterError::InsufficientLiquidity);
    }
    let weight_ratio = bdiv(e, weight_out, weight_in);
    let diff = bsub(e, balance_out, amount_out);
    let y = bdiv(e, balance_out, diff);
    let foo = bsub(e, bpow(e, y, weight_ratio), BONE);
    bdiv(e, bmul(e, balance_in, foo), bsub(e, BONE, swap_fee))
}

fn check_reserves(
    e: &Env,
    balance_in: i128,
    weight_in: i128,
    balance_out: i128,
    weight_out: i128,
    swap_fee: i128,
) {
    if balance_in <= 0 || balance_out <= 0 || weight_in <= 0 || weight_out <= 0 {
        panic_with_error!(e, RouterError::InsufficientLiquidity);
    }
    if swap_fee < 0 || swap_fee >= BONE {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
}

fn wide(e: &Env, value: i128) -> I256 {
    I256::from_i128(e, value)
}

fn narrow(e: &Env, value: I256) -> i128 {
    value
        .to_i128()
        .unwrap_or_else(|| panic_with_error!(e, RouterError::MathOverflow))
}

fn badd(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, RouterError::MathOverflow))
}

fn bsub(e: &Env, a: i128, b: i128) -> i128 {
    let (c, negative) = bsub_sign(a, b);
    if negative {
        panic_with_error!(e, RouterError::MathOverflow);
    }
    c
}

fn bsub_sign(a: i128, b: i128) -> (i128, bool) {
    if a >= b {
        (a - b, false)
    } else {
        (b - a, true)
    }
}

// a * b, rounded half up
fn bmul(e: &Env, a: i128, b: i128) -> i128 {
    let c = wide(e, a)
        .mul(&wide(e, b))
        .add(&wide(e, BONE / 2))
        .div(&wide(e, BONE));
    narrow(e, c)
}

// a / b, rounded half up
fn bdiv(e: &Env, a: i128, b: i128) -> i128 {
    if b == 0 {
        panic_with_error!(e, RouterError::MathOverflow);
    }
    let c = wide(e, a)
        .mul(&wide(e, BONE))
        .add(&wide(e, b / 2))
        .div(&wide(e, b));
    narrow(e, c)
}

// Integer power of a fixed-point base
fn bpowi(e: &Env, a: i128, n: i128) -> i128 {
    let mut a = a;
    let mut n = n;
    let mut z = if n % 2 != 0 { a } else { BONE };
    n /= 2;
    while n != 0 {
        a = bmul(e, a, a);
        if n % 2 != 0 {
            z = bmul(e, z, a);
        }
        n /= 2;
    }
    z
}

// Fixed-point power with a fractional exponent
fn bpow(e: &Env, base: i128, exp: i128) -> i128 {
    if base < MIN_BPOW_BASE || base > MAX_BPOW_BASE {
        panic_with_error!(e, RouterError::MathOverflow);
    }
    let whole = exp / BONE * BONE;
    let remain = bsub(e, exp, whole);
    let whole_pow = bpowi(e, base, whole / BONE);
    if remain == 0 {
        return whole_pow;
    }
    let partial = bpow_approx(e, base, remain, BPOW_PRECISION);
    bmul(e, whole_pow, partial)
}

// Binomial series approximation of base^exp for 0 < exp < 1
fn bpow_approx(e: &Env, base: i128, exp: i128, precision: i128) -> i128 {
    let (x, x_neg) = bsub_sign(base, BONE);
    let mut term = BONE;
    let mut sum = term;
    let mut negative = false;
    let mut i: i128 = 1;
    while term >= precision {
        let big_k = i * BONE;
        let (c, c_neg) = bsub_sign(exp, big_k - BONE);
        term = bmul(e, term, bmul(e, c, x));
        term = bdiv(e, term, big_k);
        if term == 0 {
            break;
        }
        if x_neg {
            negative = !negative;
        }
        if c_neg {
            negative = !negative;
        }
        if negative {
            sum = bsub(e, sum, term);
        } else {
            sum = badd(e, sum, term);
        }
        i += 1;
    }
    sum
}
