//! In-memory asset contracts implementing [`AssetHost`]
//!
//! Semantics follow the common token standards closely enough to exercise the
//! ledger: allowances for fungible tokens, per-token approvals and operators
//! for non-fungible tokens, approval-for-all for multi-tokens, plus per-contract
//! pause and a global blacklist.

use escrow_types::address::Address;
use escrow_types::asset::AssetKind;
use escrow_types::errors::TransferError;
use escrow_types::numeric::{Amount, TokenId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::hooks::{Receipt, ReceiveHook};
use crate::host::{AssetHost, Reenter};

/// First address handed out to deployed contracts
const CONTRACT_ADDRESS_BASE: u64 = 0xC0_0000;

#[derive(Debug, Clone, Default)]
struct FungibleContract {
    balances: HashMap<Address, Amount>,
    /// (owner, spender) -> remaining allowance
    allowances: HashMap<(Address, Address), Amount>,
    paused: bool,
}

impl FungibleContract {
    fn balance(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    fn move_units(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let available = self.balance(from);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;
        self.balances.insert(from, available - amount);
        self.balances.insert(to, credited);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
struct NftContract {
    owners: HashMap<TokenId, Address>,
    /// token -> single approved address
    approvals: HashMap<TokenId, Address>,
    /// (owner, operator)
    operators: HashSet<(Address, Address)>,
    paused: bool,
}

impl NftContract {
    fn check_owner(&self, token_id: TokenId, account: Address) -> Result<(), TransferError> {
        match self.owners.get(&token_id) {
            Some(owner) if *owner == account => Ok(()),
            _ => Err(TransferError::NotOwner { token_id, account }),
        }
    }

    fn move_token(
        &mut self,
        from: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), TransferError> {
        self.check_owner(token_id, from)?;
        self.approvals.remove(&token_id);
        self.owners.insert(token_id, to);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
struct MultiContract {
    balances: HashMap<(Address, TokenId), Amount>,
    /// (owner, operator)
    operators: HashSet<(Address, Address)>,
    paused: bool,
}

impl MultiContract {
    fn balance(&self, account: Address, id: TokenId) -> Amount {
        self.balances.get(&(account, id)).copied().unwrap_or(0)
    }

    fn move_units(
        &mut self,
        from: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let available = self.balance(from, id);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to, id)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;
        self.balances.insert((from, id), available - amount);
        self.balances.insert((to, id), credited);
        Ok(())
    }
}

/// Everything a checkpoint captures. Hooks are code, not state, and survive
/// a restore untouched.
#[derive(Debug, Clone, Default)]
struct SimState {
    fungible: HashMap<Address, FungibleContract>,
    nft: HashMap<Address, NftContract>,
    multi: HashMap<Address, MultiContract>,
    native: HashMap<Address, Amount>,
    blacklist: HashSet<Address>,
    deployed: u64,
}

/// Opaque snapshot of [`SimHost`] balances and approvals.
#[derive(Debug, Clone)]
pub struct SimCheckpoint(SimState);

/// Simulated execution environment holding every asset contract.
#[derive(Default)]
pub struct SimHost {
    state: SimState,
    hooks: HashMap<Address, Box<dyn ReceiveHook>>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────── Deployment ─────────────────────────

    fn next_contract_address(&mut self) -> Address {
        self.state.deployed += 1;
        Address::from_low_u64(CONTRACT_ADDRESS_BASE + self.state.deployed)
    }

    pub fn deploy_fungible(&mut self) -> Address {
        let address = self.next_contract_address();
        self.state.fungible.insert(address, FungibleContract::default());
        address
    }

    pub fn deploy_nft(&mut self) -> Address {
        let address = self.next_contract_address();
        self.state.nft.insert(address, NftContract::default());
        address
    }

    pub fn deploy_multi(&mut self) -> Address {
        let address = self.next_contract_address();
        self.state.multi.insert(address, MultiContract::default());
        address
    }

    // ───────────────────────── Fungible ─────────────────────────

    pub fn mint_fungible(
        &mut self,
        token: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let contract = self.fungible_mut(token)?;
        let credited = contract
            .balance(to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;
        contract.balances.insert(to, credited);
        Ok(())
    }

    /// Set the allowance `owner` grants `spender`, replacing any previous one.
    pub fn approve(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.fungible_mut(token)?
            .allowances
            .insert((owner, spender), amount);
        Ok(())
    }

    pub fn fungible_balance(&self, token: Address, account: Address) -> Amount {
        self.state
            .fungible
            .get(&token)
            .map_or(0, |contract| contract.balance(account))
    }

    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.state
            .fungible
            .get(&token)
            .map_or(0, |contract| contract.allowance(owner, spender))
    }

    // ───────────────────────── Non-fungible ─────────────────────────

    pub fn mint_nft(
        &mut self,
        token: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), TransferError> {
        let contract = self.nft_mut(token)?;
        if contract.owners.contains_key(&token_id) {
            return Err(TransferError::Rejected {
                reason: format!("token {} already minted", token_id),
            });
        }
        contract.owners.insert(token_id, to);
        Ok(())
    }

    /// Approve `spender` for a single token. Only the owner may approve.
    pub fn approve_nft(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
        token_id: TokenId,
    ) -> Result<(), TransferError> {
        let contract = self.nft_mut(token)?;
        contract.check_owner(token_id, owner)?;
        contract.approvals.insert(token_id, spender);
        Ok(())
    }

    pub fn set_nft_operator(
        &mut self,
        token: Address,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), TransferError> {
        let contract = self.nft_mut(token)?;
        if approved {
            contract.operators.insert((owner, operator));
        } else {
            contract.operators.remove(&(owner, operator));
        }
        Ok(())
    }

    pub fn owner_of(&self, token: Address, token_id: TokenId) -> Option<Address> {
        self.state
            .nft
            .get(&token)
            .and_then(|contract| contract.owners.get(&token_id))
            .copied()
    }

    /// Number of tokens `account` owns at `token`.
    pub fn nft_balance(&self, token: Address, account: Address) -> Amount {
        self.state.nft.get(&token).map_or(0, |contract| {
            contract.owners.values().filter(|owner| **owner == account).count() as Amount
        })
    }

    // ───────────────────────── Multi-token ─────────────────────────

    pub fn mint_multi(
        &mut self,
        token: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let contract = self.multi_mut(token)?;
        let credited = contract
            .balance(to, id)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;
        contract.balances.insert((to, id), credited);
        Ok(())
    }

    pub fn set_approval_for_all(
        &mut self,
        token: Address,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), TransferError> {
        let contract = self.multi_mut(token)?;
        if approved {
            contract.operators.insert((owner, operator));
        } else {
            contract.operators.remove(&(owner, operator));
        }
        Ok(())
    }

    pub fn multi_balance(&self, token: Address, account: Address, id: TokenId) -> Amount {
        self.state
            .multi
            .get(&token)
            .map_or(0, |contract| contract.balance(account, id))
    }

    // ───────────────────────── Native ─────────────────────────

    pub fn fund_native(&mut self, account: Address, amount: Amount) {
        let balance = self.state.native.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn native_balance(&self, account: Address) -> Amount {
        self.state.native.get(&account).copied().unwrap_or(0)
    }

    // ───────────────────────── Controls ─────────────────────────

    /// Pause or resume transfers at a token contract of any kind.
    pub fn set_paused(&mut self, token: Address, paused: bool) -> Result<(), TransferError> {
        if let Some(contract) = self.state.fungible.get_mut(&token) {
            contract.paused = paused;
        } else if let Some(contract) = self.state.nft.get_mut(&token) {
            contract.paused = paused;
        } else if let Some(contract) = self.state.multi.get_mut(&token) {
            contract.paused = paused;
        } else {
            return Err(TransferError::UnknownContract { contract: token });
        }
        Ok(())
    }

    /// Block every transfer to or from `account`.
    pub fn blacklist(&mut self, account: Address) {
        self.state.blacklist.insert(account);
    }

    pub fn unblacklist(&mut self, account: Address) {
        self.state.blacklist.remove(&account);
    }

    pub fn set_receive_hook(&mut self, account: Address, hook: Box<dyn ReceiveHook>) {
        self.hooks.insert(account, hook);
    }

    pub fn remove_receive_hook(&mut self, account: Address) {
        self.hooks.remove(&account);
    }

    pub fn checkpoint(&self) -> SimCheckpoint {
        SimCheckpoint(self.state.clone())
    }

    pub fn restore(&mut self, checkpoint: SimCheckpoint) {
        self.state = checkpoint.0;
    }

    // ───────────────────────── Internals ─────────────────────────

    fn fungible_mut(&mut self, token: Address) -> Result<&mut FungibleContract, TransferError> {
        self.state
            .fungible
            .get_mut(&token)
            .ok_or(TransferError::UnknownContract { contract: token })
    }

    fn nft_mut(&mut self, token: Address) -> Result<&mut NftContract, TransferError> {
        self.state
            .nft
            .get_mut(&token)
            .ok_or(TransferError::UnknownContract { contract: token })
    }

    fn multi_mut(&mut self, token: Address) -> Result<&mut MultiContract, TransferError> {
        self.state
            .multi
            .get_mut(&token)
            .ok_or(TransferError::UnknownContract { contract: token })
    }

    fn check_parties(&self, from: Address, to: Address) -> Result<(), TransferError> {
        for account in [from, to] {
            if self.state.blacklist.contains(&account) {
                return Err(TransferError::Blacklisted { account });
            }
        }
        Ok(())
    }

    fn apply_fungible(
        &mut self,
        token: Address,
        spender: Option<Address>,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.check_parties(from, to)?;
        let contract = self.fungible_mut(token)?;
        if contract.paused {
            return Err(TransferError::Paused { contract: token });
        }

        match spender {
            Some(spender) if spender != from => {
                let available = contract.allowance(from, spender);
                if available < amount {
                    return Err(TransferError::InsufficientAllowance {
                        required: amount,
                        available,
                    });
                }
                contract.move_units(from, to, amount)?;
                contract
                    .allowances
                    .insert((from, spender), available - amount);
                Ok(())
            }
            _ => contract.move_units(from, to, amount),
        }
    }

    fn apply_nft(
        &mut self,
        token: Address,
        operator: Option<Address>,
        from: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), TransferError> {
        self.check_parties(from, to)?;
        let contract = self.nft_mut(token)?;
        if contract.paused {
            return Err(TransferError::Paused { contract: token });
        }
        contract.check_owner(token_id, from)?;

        if let Some(operator) = operator {
            let approved = operator == from
                || contract.approvals.get(&token_id) == Some(&operator)
                || contract.operators.contains(&(from, operator));
            if !approved {
                return Err(TransferError::NotApproved { spender: operator });
            }
        }
        contract.move_token(from, to, token_id)
    }

    fn apply_multi(
        &mut self,
        token: Address,
        operator: Option<Address>,
        from: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.check_parties(from, to)?;
        let contract = self.multi_mut(token)?;
        if contract.paused {
            return Err(TransferError::Paused { contract: token });
        }

        if let Some(operator) = operator {
            if operator != from && !contract.operators.contains(&(from, operator)) {
                return Err(TransferError::NotApproved { spender: operator });
            }
        }
        contract.move_units(from, to, id, amount)
    }

    fn apply_native(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.check_parties(from, to)?;
        let available = self.native_balance(from);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .native_balance(to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;
        self.state.native.insert(from, available - amount);
        self.state.native.insert(to, credited);
        Ok(())
    }

    /// Snapshot taken before an outbound move, only when a hook will run.
    fn hook_checkpoint(&self, to: Address) -> Option<SimState> {
        self.hooks.contains_key(&to).then(|| self.state.clone())
    }

    /// Run the receiver's hook, rolling this host back if it rejects.
    ///
    /// The hook is detached while it runs so it can reach the host mutably;
    /// nested transfers to the same address do not run it again.
    fn notify_receiver(
        &mut self,
        reenter: &mut dyn Reenter,
        receipt: Receipt,
        checkpoint: Option<SimState>,
    ) -> Result<(), TransferError> {
        let Some(checkpoint) = checkpoint else {
            return Ok(());
        };
        let Some(mut hook) = self.hooks.remove(&receipt.to) else {
            return Ok(());
        };

        let outcome = hook.on_receive(reenter, self, &receipt);
        self.hooks.entry(receipt.to).or_insert(hook);

        match outcome {
            Ok(()) => Ok(()),
            Err(reason) => {
                debug!(
                    to = %receipt.to,
                    kind = %receipt.kind,
                    %reason,
                    "Receive hook rejected transfer"
                );
                self.state = checkpoint;
                Err(TransferError::Rejected { reason })
            }
        }
    }
}

impl AssetHost for SimHost {
    fn fungible_transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.apply_fungible(token, Some(spender), from, to, amount)
    }

    fn fungible_transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError> {
        let checkpoint = self.hook_checkpoint(to);
        self.apply_fungible(token, None, from, to, amount)?;
        let receipt = Receipt {
            kind: AssetKind::FungibleToken,
            contract: token,
            from,
            to,
            asset_id: 0,
            amount,
        };
        self.notify_receiver(reenter, receipt, checkpoint)
    }

    fn nft_transfer_from(
        &mut self,
        token: Address,
        operator: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError> {
        let checkpoint = self.hook_checkpoint(to);
        self.apply_nft(token, Some(operator), from, to, token_id)?;
        let receipt = Receipt {
            kind: AssetKind::NonFungibleToken,
            contract: token,
            from,
            to,
            asset_id: token_id,
            amount: 1,
        };
        self.notify_receiver(reenter, receipt, checkpoint)
    }

    fn nft_transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError> {
        let checkpoint = self.hook_checkpoint(to);
        self.apply_nft(token, None, from, to, token_id)?;
        let receipt = Receipt {
            kind: AssetKind::NonFungibleToken,
            contract: token,
            from,
            to,
            asset_id: token_id,
            amount: 1,
        };
        self.notify_receiver(reenter, receipt, checkpoint)
    }

    fn multi_transfer_from(
        &mut self,
        token: Address,
        operator: Address,
        from: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError> {
        let checkpoint = self.hook_checkpoint(to);
        self.apply_multi(token, Some(operator), from, to, id, amount)?;
        let receipt = Receipt {
            kind: AssetKind::MultiToken,
            contract: token,
            from,
            to,
            asset_id: id,
            amount,
        };
        self.notify_receiver(reenter, receipt, checkpoint)
    }

    fn multi_transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError> {
        let checkpoint = self.hook_checkpoint(to);
        self.apply_multi(token, None, from, to, id, amount)?;
        let receipt = Receipt {
            kind: AssetKind::MultiToken,
            contract: token,
            from,
            to,
            asset_id: id,
            amount,
        };
        self.notify_receiver(reenter, receipt, checkpoint)
    }

    fn native_receive(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.apply_native(from, to, amount)
    }

    fn native_send(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError> {
        let checkpoint = self.hook_checkpoint(to);
        self.apply_native(from, to, amount)?;
        let receipt = Receipt {
            kind: AssetKind::NativeCurrency,
            contract: Address::ZERO,
            from,
            to,
            asset_id: 0,
            amount,
        };
        self.notify_receiver(reenter, receipt, checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EscrowError;
    use escrow_types::ids::RecordId;

    /// Stand-in for the ledger when no hook re-enters.
    struct NoReentry;

    impl Reenter for NoReentry {
        fn reenter_withdraw(
            &mut self,
            _host: &mut dyn AssetHost,
            _caller: Address,
            id: RecordId,
        ) -> Result<(), EscrowError> {
            Err(EscrowError::RecordNotFound { id })
        }
    }

    fn addr(n: u64) -> Address {
        Address::from_low_u64(n)
    }

    #[test]
    fn test_transfer_from_consumes_allowance() {
        let mut host = SimHost::new();
        let token = host.deploy_fungible();
        host.mint_fungible(token, addr(1), 10).unwrap();
        host.approve(token, addr(1), addr(9), 6).unwrap();

        host.fungible_transfer_from(token, addr(9), addr(1), addr(9), 4).unwrap();
        assert_eq!(host.allowance(token, addr(1), addr(9)), 2);
        assert_eq!(host.fungible_balance(token, addr(9)), 4);

        let result = host.fungible_transfer_from(token, addr(9), addr(1), addr(9), 3);
        assert_eq!(
            result,
            Err(TransferError::InsufficientAllowance {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_transfer_from_insufficient_balance() {
        let mut host = SimHost::new();
        let token = host.deploy_fungible();
        host.mint_fungible(token, addr(1), 2).unwrap();
        host.approve(token, addr(1), addr(9), 5).unwrap();

        let result = host.fungible_transfer_from(token, addr(9), addr(1), addr(9), 5);
        assert!(matches!(result, Err(TransferError::InsufficientBalance { .. })));
        assert_eq!(host.allowance(token, addr(1), addr(9)), 5);
    }

    #[test]
    fn test_unknown_contract() {
        let mut host = SimHost::new();
        let result = host.fungible_transfer_from(addr(77), addr(9), addr(1), addr(9), 1);
        assert_eq!(
            result,
            Err(TransferError::UnknownContract { contract: addr(77) })
        );
    }

    #[test]
    fn test_nft_requires_approval() {
        let mut host = SimHost::new();
        let token = host.deploy_nft();
        host.mint_nft(token, addr(1), 1).unwrap();

        let result = host.nft_transfer_from(token, addr(9), addr(1), addr(9), 1, &mut NoReentry);
        assert_eq!(result, Err(TransferError::NotApproved { spender: addr(9) }));

        host.set_nft_operator(token, addr(1), addr(9), true).unwrap();
        host.nft_transfer_from(token, addr(9), addr(1), addr(9), 1, &mut NoReentry).unwrap();
        assert_eq!(host.owner_of(token, 1), Some(addr(9)));
        assert_eq!(host.nft_balance(token, addr(1)), 0);
    }

    #[test]
    fn test_nft_approval_cleared_on_transfer() {
        let mut host = SimHost::new();
        let token = host.deploy_nft();
        host.mint_nft(token, addr(1), 1).unwrap();
        host.approve_nft(token, addr(1), addr(9), 1).unwrap();
        host.nft_transfer_from(token, addr(9), addr(1), addr(2), 1, &mut NoReentry).unwrap();

        let result = host.nft_transfer_from(token, addr(9), addr(2), addr(9), 1, &mut NoReentry);
        assert_eq!(result, Err(TransferError::NotApproved { spender: addr(9) }));
    }

    #[test]
    fn test_multi_requires_approval_for_all() {
        let mut host = SimHost::new();
        let token = host.deploy_multi();
        host.mint_multi(token, addr(1), 1, 10).unwrap();

        let result =
            host.multi_transfer_from(token, addr(9), addr(1), addr(9), 1, 5, &mut NoReentry);
        assert_eq!(result, Err(TransferError::NotApproved { spender: addr(9) }));

        host.set_approval_for_all(token, addr(1), addr(9), true).unwrap();
        host.multi_transfer_from(token, addr(9), addr(1), addr(9), 1, 5, &mut NoReentry).unwrap();
        assert_eq!(host.multi_balance(token, addr(1), 1), 5);
        assert_eq!(host.multi_balance(token, addr(9), 1), 5);
    }

    #[test]
    fn test_blacklisted_receiver() {
        let mut host = SimHost::new();
        host.fund_native(addr(1), 5);
        host.blacklist(addr(2));

        let result = host.native_send(addr(1), addr(2), 5, &mut NoReentry);
        assert_eq!(result, Err(TransferError::Blacklisted { account: addr(2) }));
        assert_eq!(host.native_balance(addr(1)), 5);

        host.unblacklist(addr(2));
        host.native_send(addr(1), addr(2), 5, &mut NoReentry).unwrap();
        assert_eq!(host.native_balance(addr(2)), 5);
    }

    #[test]
    fn test_hook_rejection_rolls_back() {
        use crate::sim::hooks::Refuse;

        let mut host = SimHost::new();
        host.fund_native(addr(1), 5);
        host.set_receive_hook(
            addr(2),
            Box::new(Refuse {
                kind: AssetKind::NativeCurrency,
            }),
        );

        let result = host.native_send(addr(1), addr(2), 5, &mut NoReentry);
        assert!(matches!(result, Err(TransferError::Rejected { .. })));
        assert_eq!(host.native_balance(addr(1)), 5);
        assert_eq!(host.native_balance(addr(2)), 0);

        host.remove_receive_hook(addr(2));
        host.native_send(addr(1), addr(2), 5, &mut NoReentry).unwrap();
        assert_eq!(host.native_balance(addr(2)), 5);
    }

    #[test]
    fn test_pause_blocks_transfers() {
        let mut host = SimHost::new();
        let token = host.deploy_multi();
        host.mint_multi(token, addr(1), 1, 10).unwrap();
        host.set_paused(token, true).unwrap();

        let result = host.multi_transfer(token, addr(1), addr(2), 1, 5, &mut NoReentry);
        assert_eq!(result, Err(TransferError::Paused { contract: token }));
        assert_eq!(
            host.set_paused(addr(77), true),
            Err(TransferError::UnknownContract { contract: addr(77) })
        );
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut host = SimHost::new();
        host.fund_native(addr(1), 5);
        let checkpoint = host.checkpoint();
        host.native_receive(addr(1), addr(2), 5).unwrap();
        host.restore(checkpoint);
        assert_eq!(host.native_balance(addr(1)), 5);
        assert_eq!(host.native_balance(addr(2)), 0);
    }
}
