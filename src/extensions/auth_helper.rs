use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    symbol_short, Address, Env, IntoVal, Vec,
};

// Authorize a contract called by the router to move router-owned tokens
// with a single `transfer` of exactly `amount`
//
// # Arguments
//
// * `env` - The environment
// * `recipient` - Contract that pulls the tokens (e.g. the native wrapper)
// * `token` - The address of the token to transfer
// * `amount` - The amount of token to transfer
pub fn add_transfer_auth(env: &Env, recipient: &Address, token: &Address, amount: i128) {
    let invocation = InvokerContractAuthEntry::Contract(SubContractInvocation {
        context: ContractContext {
            contract: token.clone(),
            fn_name: symbol_short!("transfer"),
            args: Vec::from_array(
                &env,
                [
                    env.current_contract_address().to_val(),
                    recipient.clone().to_val(),
                    amount.into_val(env),
                ],
            ),
        },
        sub_invocations: Vec::new(&env),
    });

    env.authorize_as_current_contract(Vec::from_array(env, [invocation]));
}
