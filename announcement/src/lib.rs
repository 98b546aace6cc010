#![no_std]

multiversx_sc::imports!();

pub mod announcement_proxy;
pub mod types;

use green_dex::green_dex_proxy;
use green_token::green_token_proxy;

use types::AnnouncementStatus;

// ============================================================
// Constants
// ============================================================

/// Reward percentages are expressed over this denominator; integer
/// division truncates and the remainder stays on the contract.
const PERCENTAGE_DENOMINATOR: u64 = 100;

/// A task needs at least this many participants to be worth announcing.
const MIN_PARTICIPANTS: u64 = 2;

// ============================================================
// Contract
// ============================================================

/// Coordinates a single machine-learning task between the manufacturer
/// who funds it, the validator who certifies its completion, and the
/// consumers who subscribe as participants. Rewards settle in the
/// GreenTokens issued by the exchange bound at deployment.
#[multiversx_sc::contract]
pub trait Announcement {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, green_dex_address: ManagedAddress) {
        self.manufacturer_address()
            .set(&self.blockchain().get_caller());
        self.green_dex_address().set(&green_dex_address);
        self.status().set(AnnouncementStatus::Uninitialized);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initialize
    // Manufacturer-only, single-shot. Records the task attributes
    // and opens the subscriptions.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(
        &self,
        task_configuration: ManagedBuffer,
        max_number_participant: u64,
        tokens_at_stake: BigUint,
        percentage_reward_validator: u64,
        validator_address: ManagedAddress,
    ) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.manufacturer_address().get(),
            "Only the manufacturer can initialize"
        );
        require!(
            self.status().get() == AnnouncementStatus::Uninitialized,
            "Already initialized"
        );
        require!(
            tokens_at_stake > 0u64,
            "Tokens at stake must be more than zero"
        );
        require!(
            max_number_participant >= MIN_PARTICIPANTS,
            "At least two participants required"
        );
        require!(
            percentage_reward_validator > 0
                && percentage_reward_validator <= PERCENTAGE_DENOMINATOR,
            "Invalid validator reward percentage"
        );

        self.task_configuration().set(&task_configuration);
        self.max_number_participant().set(max_number_participant);
        self.tokens_at_stake().set(&tokens_at_stake);
        self.percentage_reward_validator()
            .set(percentage_reward_validator);
        self.validator_address().set(&validator_address);
        self.status().set(AnnouncementStatus::Open);

        self.announcement_initialized_event(
            &validator_address,
            &tokens_at_stake,
            max_number_participant,
        );
    }

    // ========================================================
    // ENDPOINT: subscribe
    // Open to any address while the task is open and the roster
    // has room. The insertion index is the permanent id.
    // ========================================================

    #[endpoint(subscribe)]
    fn subscribe(&self) {
        require!(
            self.status().get() == AnnouncementStatus::Open,
            "Subscriptions are not open"
        );

        let caller = self.blockchain().get_caller();
        require!(!self.subscribed(&caller).get(), "Already subscribed");

        let participant_id = self.participants().len() as u64;
        require!(
            participant_id < self.max_number_participant().get(),
            "Maximum number of participants reached"
        );

        self.participants().push(&caller);
        self.participant_id(&caller).set(participant_id);
        self.subscribed(&caller).set(true);

        self.participant_subscribed_event(&caller, participant_id);
    }

    // ========================================================
    // ENDPOINT: endTask
    // Validator-only. Fixes one reward percentage per participant,
    // in subscription order, each relative to the pool left after
    // the validator's cut. The sum is deliberately not validated.
    // ========================================================

    #[endpoint(endTask)]
    fn end_task(&self, percentage_participants_reward: MultiValueEncoded<u64>) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.validator_address().get(),
            "Only the validator can end the task"
        );
        require!(
            self.status().get() == AnnouncementStatus::Open,
            "Task is not open"
        );
        require!(
            percentage_participants_reward.len() == self.participants().len(),
            "One reward percentage per participant"
        );

        for percentage in percentage_participants_reward.into_iter() {
            self.percentage_participants_reward().push(&percentage);
        }
        self.status().set(AnnouncementStatus::Finished);

        self.task_ended_event(&caller);
    }

    // ========================================================
    // ENDPOINT: assignRewards
    // Manufacturer-only, once the validator has ended the task and
    // the stake sits on the contract. Terminal.
    // ========================================================

    #[endpoint(assignRewards)]
    fn assign_rewards(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.manufacturer_address().get(),
            "Only the manufacturer can assign rewards"
        );

        let status = self.status().get();
        require!(
            status != AnnouncementStatus::Settled,
            "Rewards already assigned"
        );
        require!(
            status == AnnouncementStatus::Finished,
            "Task is not finished"
        );

        let token_address = self.resolve_token_address();
        let own_address = self.blockchain().get_sc_address();
        let token_balance: BigUint = self
            .tx()
            .to(&token_address)
            .typed(green_token_proxy::GreenTokenProxy)
            .balance_of(own_address)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let tokens_at_stake = self.tokens_at_stake().get();
        require!(
            token_balance >= tokens_at_stake,
            "Insufficient funds to assign rewards"
        );

        // Terminal state before any transfer: the recipients below are
        // external code and must not be able to re-enter a payout.
        self.status().set(AnnouncementStatus::Settled);

        let validator_reward =
            &tokens_at_stake * self.percentage_reward_validator().get() / PERCENTAGE_DENOMINATOR;
        let remaining_reward = &tokens_at_stake - &validator_reward;

        let validator = self.validator_address().get();
        self.tx()
            .to(&token_address)
            .typed(green_token_proxy::GreenTokenProxy)
            .transfer(validator, validator_reward.clone())
            .sync_call();

        let n_participants = self.participants().len();
        for i in 1..=n_participants {
            let participant = self.participants().get(i);
            let percentage = self.percentage_participants_reward().get(i);
            let reward = &remaining_reward * percentage / PERCENTAGE_DENOMINATOR;

            self.tx()
                .to(&token_address)
                .typed(green_token_proxy::GreenTokenProxy)
                .transfer(participant, reward)
                .sync_call();
        }

        self.rewards_assigned_event(&validator_reward, &remaining_reward);
    }

    // ========================================================
    // INTERNAL: token lookup
    // The announcement only stores the exchange; the ledger it pays
    // with is whatever the exchange reports.
    // ========================================================

    fn resolve_token_address(&self) -> ManagedAddress {
        let green_dex_address = self.green_dex_address().get();
        self.tx()
            .to(&green_dex_address)
            .typed(green_dex_proxy::GreenDexProxy)
            .token_address()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getParticipantId)]
    fn get_participant_id(&self, address: ManagedAddress) -> u64 {
        require!(self.subscribed(&address).get(), "Not subscribed");
        self.participant_id(&address).get()
    }

    #[view(currentNumberParticipant)]
    fn current_number_participant(&self) -> u64 {
        self.participants().len() as u64
    }

    #[view(isFinished)]
    fn is_finished(&self) -> bool {
        let status = self.status().get();
        status == AnnouncementStatus::Finished || status == AnnouncementStatus::Settled
    }

    #[view(getParticipants)]
    fn get_participants(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for participant in self.participants().iter() {
            result.push(participant);
        }
        result
    }

    #[view(getPercentageParticipantsReward)]
    fn get_percentage_participants_reward(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for percentage in self.percentage_participants_reward().iter() {
            result.push(percentage);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("announcementInitialized")]
    fn announcement_initialized_event(
        &self,
        #[indexed] validator: &ManagedAddress,
        #[indexed] tokens_at_stake: &BigUint,
        max_number_participant: u64,
    );

    #[event("participantSubscribed")]
    fn participant_subscribed_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] participant_id: u64,
    );

    #[event("taskEnded")]
    fn task_ended_event(&self, #[indexed] validator: &ManagedAddress);

    #[event("rewardsAssigned")]
    fn rewards_assigned_event(
        &self,
        #[indexed] validator_reward: &BigUint,
        remaining_reward: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Roles ──

    #[view(manufacturerAddress)]
    #[storage_mapper("manufacturerAddress")]
    fn manufacturer_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(validatorAddress)]
    #[storage_mapper("validatorAddress")]
    fn validator_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGreenDexAddress)]
    #[storage_mapper("greenDexAddress")]
    fn green_dex_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Task attributes ──

    #[view(taskConfiguration)]
    #[storage_mapper("taskConfiguration")]
    fn task_configuration(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(maxNumberParticipant)]
    #[storage_mapper("maxNumberParticipant")]
    fn max_number_participant(&self) -> SingleValueMapper<u64>;

    #[view(tokensAtStake)]
    #[storage_mapper("tokensAtStake")]
    fn tokens_at_stake(&self) -> SingleValueMapper<BigUint>;

    #[view(percentageRewardValidator)]
    #[storage_mapper("percentageRewardValidator")]
    fn percentage_reward_validator(&self) -> SingleValueMapper<u64>;

    // ── Roster ──

    #[storage_mapper("participants")]
    fn participants(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("participantId")]
    fn participant_id(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("subscribed")]
    fn subscribed(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Settlement ──

    #[storage_mapper("percentageParticipantsReward")]
    fn percentage_participants_reward(&self) -> VecMapper<u64>;

    #[view(getStatus)]
    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<AnnouncementStatus>;
}
