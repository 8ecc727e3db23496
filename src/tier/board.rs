//! Tier board: players bucketed by cost, best score first.

use crate::tier::directory::DirectoryPlayer;
use serde::Serialize;

/// Cost tiers, most expensive first.
pub const COST_TIERS: [u32; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Below this many games a player is still in placement.
pub const PLACEMENT_MIN_GAMES: u32 = 4;

/// Tier placement players are shown in.
pub const PLACEMENT_DEFAULT_COST: u32 = 1;

/// Not enough games, or no cost assigned yet.
pub fn is_placement(player: &DirectoryPlayer) -> bool {
    player.games < PLACEMENT_MIN_GAMES || matches!(player.cost, None | Some(0))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEntry {
    #[serde(flatten)]
    pub player: DirectoryPlayer,
    pub placement: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TierBucket {
    pub cost: u32,
    pub players: Vec<TierEntry>,
}

/// One bucket per cost tier (possibly empty). Players with a cost outside the
/// tiers are left out.
pub fn build_board(players: &[DirectoryPlayer]) -> Vec<TierBucket> {
    let mut buckets: Vec<TierBucket> = COST_TIERS
        .iter()
        .map(|&cost| TierBucket {
            cost,
            players: Vec::new(),
        })
        .collect();

    for player in players {
        let placement = is_placement(player);
        let cost = match player.cost {
            Some(cost) if !placement => cost,
            _ => PLACEMENT_DEFAULT_COST,
        };
        match buckets.iter_mut().find(|b| b.cost == cost) {
            Some(bucket) => bucket.players.push(TierEntry {
                player: player.clone(),
                placement,
            }),
            None => log::debug!("Player {} has cost {} outside the tiers", player.id, cost),
        }
    }

    for bucket in &mut buckets {
        bucket
            .players
            .sort_by(|a, b| b.player.score.total_cmp(&a.player.score));
    }
    buckets
}
