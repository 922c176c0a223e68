use anchor_lang::prelude::*;

use crate::errors::SuperfanError;
use crate::events::ReputationUpdated;
use crate::state::{ScoutRegistry, SuperfanConfig};
use crate::UpdateReputation;

pub fn update_reputation(ctx: Context<UpdateReputation>, delta: i64) -> Result<()> {
    let user = ctx.accounts.user.key();

    apply_reputation_delta(
        &mut ctx.accounts.scout_registry,
        &ctx.accounts.config,
        ctx.accounts.admin.key(),
        user,
        delta,
        ctx.bumps.scout_registry,
    )?;

    emit!(ReputationUpdated {
        user,
        new_score: ctx.accounts.scout_registry.score,
    });
    Ok(())
}

/// Adds `delta` to the scout's score. Only the config admin may call this.
pub fn apply_reputation_delta(
    registry: &mut ScoutRegistry,
    cfg: &SuperfanConfig,
    caller: Pubkey,
    user: Pubkey,
    delta: i64,
    bump: u8,
) -> Result<()> {
    require_keys_eq!(cfg.admin, caller, SuperfanError::Unauthorized);
    let score = registry
        .score
        .checked_add(delta)
        .ok_or(SuperfanError::MathOverflow)?;

    registry.user = user;
    registry.score = score;
    registry.bump = bump;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn config() -> SuperfanConfig {
        SuperfanConfig {
            admin: Pubkey::new_unique(),
            ..SuperfanConfig::default()
        }
    }

    #[test]
    fn deltas_accumulate() {
        let cfg = config();
        let user = Pubkey::new_unique();
        let mut registry = ScoutRegistry::default();

        apply_reputation_delta(&mut registry, &cfg, cfg.admin, user, 10, 250).expect("+10");
        apply_reputation_delta(&mut registry, &cfg, cfg.admin, user, -25, 250).expect("-25");
        assert_eq!(registry.user, user);
        assert_eq!(registry.score, -15);
        assert_eq!(registry.bump, 250);
    }

    #[test]
    fn only_admin_can_update() {
        let cfg = config();
        let mut registry = ScoutRegistry::default();

        let res = apply_reputation_delta(
            &mut registry,
            &cfg,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            5,
            1,
        );
        assert_eq!(res.unwrap_err(), Error::from(SuperfanError::Unauthorized));
        assert_eq!(registry.score, 0);
    }

    #[test]
    fn overflow_leaves_score_unchanged() {
        let cfg = config();
        let user = Pubkey::new_unique();
        let mut registry = ScoutRegistry {
            user,
            score: i64::MAX - 1,
            bump: 1,
        };

        let res = apply_reputation_delta(&mut registry, &cfg, cfg.admin, user, 2, 1);
        assert_eq!(res.unwrap_err(), Error::from(SuperfanError::MathOverflow));
        assert_eq!(registry.score, i64::MAX - 1);
    }
}
