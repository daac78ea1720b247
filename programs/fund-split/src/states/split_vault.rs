use anchor_lang::prelude::*;

use crate::constants::TOTAL_SHARE_PERCENT;
use crate::errors::ErrorCode;
use crate::math;
use crate::states::Member;

/// A proportional fund-distribution vault. Lamports sent to the vault are
/// split between registered members by whole-percent share: `allocate`
/// credits each member's claim on newly received funds and `withdraw` pays a
/// single member's claim out. The registry is fixed at initialization; no
/// member or share updates exist.
#[account]
#[derive(Debug)]
pub struct SplitVault {
    /// PDA bump paired with `seed`
    pub bump: u8,
    /// Caller-chosen identifier the vault address is derived from
    pub seed: String,
    /// When true, only the member itself may trigger its withdrawal
    pub secure_withdrawal: bool,
    /// Timestamp the vault was initialized at
    pub initialized_at: u64,
    /// Authority that created the vault; the only identity allowed to close it
    pub initializer: Pubkey,
    /// Timestamp of the most recent successful withdrawal
    pub last_withdrawal: u64,
    /// Payees with their share and unwithdrawn claim, in creation order
    pub members: Vec<Member>,
}

impl SplitVault {
    /// Account size for a given seed and member count.
    pub fn space(seed: &str, member_count: usize) -> usize {
        8 +                             // discriminator
        1 +                             // bump
        4 + seed.len() +                // seed
        1 +                             // secure_withdrawal
        8 +                             // initialized_at
        32 +                            // initializer
        8 +                             // last_withdrawal
        4 + member_count * Member::LEN  // members
    }

    /// Validates the registry and builds the initial vault record. Member
    /// amounts always start at zero regardless of the caller's input.
    pub fn try_new(
        vault_address: Pubkey,
        bump: u8,
        seed: String,
        secure_withdrawal: bool,
        initializer: Pubkey,
        members: &[Member],
        now: u64,
    ) -> Result<Self> {
        require!(!members.is_empty(), ErrorCode::NoMembersProvided);
        verify_total_share(members)?;
        verify_no_self_reference(members, &vault_address)?;

        Ok(Self {
            bump,
            seed,
            secure_withdrawal,
            initialized_at: now,
            initializer,
            last_withdrawal: 0,
            members: members
                .iter()
                .map(|member| Member::new(member.address, member.share))
                .collect(),
        })
    }

    /// Total currently allocated to members and not yet withdrawn.
    pub fn allocated_funds(&self) -> Result<u64> {
        let mut total: u64 = 0;
        for member in &self.members {
            total = math::checked_add(total, member.amount)?;
        }
        Ok(total)
    }

    /// Lamports received since the last allocation: the current balance less
    /// the rent-exempt reserve and everything already promised to members.
    pub fn available_funds(&self, lamports: u64, rent_reserve: u64) -> Result<u64> {
        let reserved = math::checked_add(self.allocated_funds()?, rent_reserve)?;
        math::checked_sub(lamports, reserved)
    }

    /// Credits `increment` to members in registry order, each receiving
    /// floor(increment * share / 100). Returns (credited, remainder). The
    /// remainder stays in the vault's balance, unattributed, and is offered
    /// again by a later allocation once it is large enough to split.
    pub fn allocate(&mut self, increment: u64) -> Result<(u64, u64)> {
        if increment == 0 {
            return Ok((0, 0));
        }

        let mut credited: u64 = 0;
        let mut fractions: u64 = 0;

        for member in &mut self.members {
            let product = math::checked_mul(increment, u64::from(member.share))?;
            let credit = math::checked_div(product, TOTAL_SHARE_PERCENT)?;
            let fraction = math::checked_rem(product, TOTAL_SHARE_PERCENT)?;

            member.credit(credit)?;
            credited = math::checked_add(credited, credit)?;
            fractions = math::checked_add(fractions, fraction)?;

            msg!(
                "member {} share {}% credited {} claim now {}",
                member.address,
                member.share,
                credit,
                member.amount
            );
        }

        // shares sum to 100, so the accumulated fractions divide evenly and
        // credited + remainder == increment
        let remainder = math::checked_div(fractions, TOTAL_SHARE_PERCENT)?;
        Ok((credited, remainder))
    }

    /// Looks up a member by address. Resolution is first-match: when an
    /// address appears in the registry more than once, later entries are
    /// shadowed and their claims cannot be settled.
    pub fn member_index(&self, address: &Pubkey) -> Result<usize> {
        let index = self
            .members
            .iter()
            .position(|member| member.address == *address)
            .ok_or(ErrorCode::MemberWithAddressDoesNotExist)?;
        Ok(index)
    }

    /// Settles one member's claim: resolves the member, enforces the
    /// withdrawal mode, zeroes the claim, and stamps the withdrawal time.
    /// Returns the amount the caller must move out of the vault's balance,
    /// always destined for the member address, never the payer.
    pub fn withdraw(&mut self, member_address: &Pubkey, payer: &Pubkey, now: u64) -> Result<u64> {
        let index = self.member_index(member_address)?;

        if self.secure_withdrawal && payer != member_address {
            return Err(ErrorCode::NotAuthorizedToWithdrawFunds.into());
        }

        let member = &mut self.members[index];
        require!(member.amount > 0, ErrorCode::NoRedeemableFunds);

        let amount = member.clear();
        self.last_withdrawal = now;

        Ok(amount)
    }

    /// True once every member's claim is fully withdrawn.
    pub fn funds_withdrawn(&self) -> bool {
        self.members.iter().all(|member| member.amount == 0)
    }
}

fn verify_total_share(members: &[Member]) -> Result<()> {
    let mut total: u64 = 0;
    for member in members {
        total = math::checked_add(total, u64::from(member.share))?;
    }
    require!(total == TOTAL_SHARE_PERCENT, ErrorCode::InvalidMemberShare);
    Ok(())
}

fn verify_no_self_reference(members: &[Member], vault_address: &Pubkey) -> Result<()> {
    for member in members {
        require!(
            member.address != *vault_address,
            ErrorCode::SelfReferencingMember
        );
    }
    Ok(())
}
