use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, MintTo, Transfer};
use crate::constants::GSO_AUTHORITY_SEED;

/// Moves tokens the signer owns into the vault.
pub fn deposit<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    owner: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program,
            Transfer {
                from,
                to: vault,
                authority: owner,
            },
        ),
        amount,
    )
}

pub fn release<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    gso_authority: AccountInfo<'info>,
    project: &Pubkey,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    // The program signer owns the vault, so outflows are signed with its seeds.
    let bump = [authority_bump];
    let seeds: &[&[u8]] = &[GSO_AUTHORITY_SEED, project.as_ref(), &bump];
    let signer = [seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: vault,
                to,
                authority: gso_authority,
            },
            &signer,
        ),
        amount,
    )
}

pub fn mint_claim<'info>(
    token_program: AccountInfo<'info>,
    claim_mint: AccountInfo<'info>,
    to: AccountInfo<'info>,
    gso_authority: AccountInfo<'info>,
    project: &Pubkey,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    let bump = [authority_bump];
    let seeds: &[&[u8]] = &[GSO_AUTHORITY_SEED, project.as_ref(), &bump];
    let signer = [seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program,
            MintTo {
                mint: claim_mint,
                to,
                authority: gso_authority,
            },
            &signer,
        ),
        amount,
    )
}

/// Burns from a holder's account; the holder signs, not the program.
pub fn burn_claim<'info>(
    token_program: AccountInfo<'info>,
    claim_mint: AccountInfo<'info>,
    from: AccountInfo<'info>,
    owner: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::burn(
        CpiContext::new(
            token_program,
            Burn {
                mint: claim_mint,
                from,
                authority: owner,
            },
        ),
        amount,
    )
}
