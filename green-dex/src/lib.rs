#![no_std]

multiversx_sc::imports!();

pub mod green_dex_proxy;

use green_token::green_token_proxy;

// ============================================================
// Contract
// ============================================================

/// Fixed-rate exchange between EGLD and GreenTokens: one token minted
/// per unit deposited, one unit released per token burned. The EGLD
/// received on purchases stays on the contract, so the exchange always
/// holds exactly the ledger's total supply.
#[multiversx_sc::contract]
pub trait GreenDex {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, token_address: ManagedAddress) {
        self.token_address().set(&token_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: buy
    // Mints tokens 1:1 for the EGLD deposited by the caller.
    // ========================================================

    #[endpoint(buy)]
    #[payable("EGLD")]
    fn buy(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "No value deposited");

        self.tx()
            .to(self.token_address().get())
            .typed(green_token_proxy::GreenTokenProxy)
            .mint(caller.clone(), payment.clone())
            .sync_call();

        self.bought_event(&caller, &payment);
    }

    // ========================================================
    // ENDPOINT: sell
    // Pulls tokens through the caller's allowance, burns them and
    // releases the equivalent EGLD.
    // ========================================================

    #[endpoint(sell)]
    fn sell(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, "Amount must be more than zero");

        let token_address = self.token_address().get();
        let own_address = self.blockchain().get_sc_address();

        // The caller must have approved the exchange beforehand; the
        // spend consumes the allowance like any other delegated transfer.
        self.tx()
            .to(&token_address)
            .typed(green_token_proxy::GreenTokenProxy)
            .transfer_from(caller.clone(), own_address.clone(), amount.clone())
            .sync_call();

        self.tx()
            .to(&token_address)
            .typed(green_token_proxy::GreenTokenProxy)
            .burn(own_address, amount.clone())
            .sync_call();

        self.send().direct_egld(&caller, &amount);

        self.sold_event(&caller, &amount);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("bought")]
    fn bought_event(&self, #[indexed] who: &ManagedAddress, amount: &BigUint);

    #[event("sold")]
    fn sold_event(&self, #[indexed] who: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTokenAddress)]
    #[storage_mapper("tokenAddress")]
    fn token_address(&self) -> SingleValueMapper<ManagedAddress>;
}
