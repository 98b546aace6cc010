#![no_std]

multiversx_sc::imports!();

pub mod green_token_proxy;

// ============================================================
// Contract
// ============================================================

/// Balance and allowance ledger for GreenTokens. Supply changes only
/// through the exchange recorded at deployment: the GreenDEX mints on
/// every purchase and burns on every sale.
#[multiversx_sc::contract]
pub trait GreenToken {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, exchange_address: ManagedAddress) {
        self.exchange_address().set(&exchange_address);
        self.total_supply().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: transfer
    // Moves tokens from the caller to any other address.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: approve
    // Grants a spender the right to move up to `amount` of the
    // caller's tokens. Overwrites any previous allowance.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);

        self.approval_event(&caller, &spender, &amount);
    }

    // ========================================================
    // ENDPOINT: transferFrom
    // Spends the caller's allowance on the owner's balance.
    // The allowance is checked before the balance.
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, owner: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let allowance = self.allowance(&owner, &caller).get();
        require!(allowance >= amount, "Insufficient allowance");

        self.allowance(&owner, &caller).set(&allowance - &amount);
        self.move_balance(&owner, &to, &amount);

        self.transfer_event(&owner, &to, &amount);
    }

    // ========================================================
    // ENDPOINT: mint
    // Exchange-only. Credits freshly created tokens.
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_caller_is_exchange();

        self.balance(&to).update(|balance| *balance += &amount);
        self.total_supply().update(|supply| *supply += &amount);

        self.mint_event(&to, &amount);
    }

    // ========================================================
    // ENDPOINT: burn
    // Exchange-only. Destroys tokens from a holder's balance.
    // ========================================================

    #[endpoint(burn)]
    fn burn(&self, from: ManagedAddress, amount: BigUint) {
        self.require_caller_is_exchange();

        let balance = self.balance(&from).get();
        require!(balance >= amount, "Insufficient balance");

        self.balance(&from).set(&balance - &amount);
        self.total_supply().update(|supply| *supply -= &amount);

        self.burn_event(&from, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balance(from).get();
        require!(&from_balance >= amount, "Insufficient balance");

        self.balance(from).set(&from_balance - amount);
        self.balance(to).update(|balance| *balance += amount);
    }

    fn require_caller_is_exchange(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.exchange_address().get(),
            "Only the exchange can mint or burn"
        );
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balance(&address).get()
    }

    #[view(getAllowance)]
    fn get_allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowance(&owner, &spender).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("burn")]
    fn burn_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("balance")]
    fn balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(getTotalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getExchangeAddress)]
    #[storage_mapper("exchangeAddress")]
    fn exchange_address(&self) -> SingleValueMapper<ManagedAddress>;
}
