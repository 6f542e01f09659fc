//! Role assignment: the role-count table and the shuffle that deals it.

use agora_protocol::ParticipantId;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::state::{PlayerStatus, Role, RoleAssignment};

/// Smallest roster that can be dealt.
pub const MIN_PLAYERS: usize = 6;
/// Largest roster that can be dealt.
pub const MAX_PLAYERS: usize = 10;

/// Role counts for a roster of `n`, as (villagers, mafia, doctors, police).
///
/// `None` outside the supported window.
pub fn role_counts(n: usize) -> Option<(usize, usize, usize, usize)> {
    match n {
        6 => Some((2, 2, 1, 1)),
        7 => Some((3, 2, 1, 1)),
        8 => Some((3, 3, 1, 1)),
        9 => Some((4, 3, 1, 1)),
        10 => Some((5, 3, 1, 1)),
        _ => None,
    }
}

/// The role-tag multiset for a roster of `n`, sized exactly `n`.
fn role_tags(n: usize) -> Option<Vec<Role>> {
    let (villagers, mafia, doctors, police) = role_counts(n)?;
    let mut tags = Vec::with_capacity(n);
    tags.extend(std::iter::repeat_n(Role::Villager, villagers));
    tags.extend(std::iter::repeat_n(Role::Mafia, mafia));
    tags.extend(std::iter::repeat_n(Role::Doctor, doctors));
    tags.extend(std::iter::repeat_n(Role::Police, police));
    Some(tags)
}

/// Deals roles to `players` with a single unbiased in-place shuffle.
///
/// Builds the role-tag multiset per the table, Fisher–Yates shuffles the
/// roster, and assigns tag `i` to shuffled participant `i`. O(n), always
/// terminates, exact counts guaranteed. `None` when the roster size is
/// outside [`MIN_PLAYERS`, `MAX_PLAYERS`].
pub fn assign_roles<R: Rng>(players: &[ParticipantId], rng: &mut R) -> Option<Vec<RoleAssignment>> {
    let tags = role_tags(players.len())?;
    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);
    Some(
        shuffled
            .into_iter()
            .zip(tags)
            .map(|(player, role)| RoleAssignment {
                player,
                role,
                status: PlayerStatus::Alive,
            })
            .collect(),
    )
}
