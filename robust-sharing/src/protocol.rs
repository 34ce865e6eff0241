//! The three public operations: authenticated sharing, authenticated reconstruction, and
//! unauthenticated (diagnostic) reconstruction.

use crate::errors::{
    ReconstructAuthenticatedError, ReconstructUnauthenticatedError, ReconstructionFailure, ShareAuthenticatedError,
};
use crate::record::RobustShareRecord;
use basic_types::PlayerId;
use math_lib::{codec, mac, pairing, shamir};
use num_bigint::{BigInt, BigUint};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Splits `secret` into an authenticated robust share record per player.
///
/// Follows §4.8.1: encode the secret, split it with the Shamir core, pack each evaluation
/// point into a share integer, generate an `n`-wide check-vector batch per holder, and
/// cross-assemble each player's `keys`/`tags` maps from those batches.
///
/// # Errors
/// Propagates [`ShareAuthenticatedError`] if the sharing parameters are invalid, packing an
/// evaluation point fails, or generating a check-vector batch fails.
pub fn share_authenticated(
    players: &[PlayerId],
    t: u64,
    l: u64,
    secret: &[u8],
) -> Result<BTreeMap<PlayerId, String>, ShareAuthenticatedError> {
    let n = players.len() as u64;
    let secret_int = codec::int_of_bytes(secret);
    let points = shamir::share_int(n, t, l, &secret_int)?;

    let shares: Vec<BigUint> = points
        .iter()
        .map(|(x, y)| pairing::elegant_pair(&BigInt::from(x.clone()), &BigInt::from(y.clone())))
        .collect::<Result<_, _>>()?;

    // key_from[p][j] / tag_to[p][j]: the batch holder p generates, indexed by verifier j.
    let mut key_from: BTreeMap<PlayerId, BTreeMap<PlayerId, BigUint>> = BTreeMap::new();
    let mut tag_to: BTreeMap<PlayerId, BTreeMap<PlayerId, (BigUint, BigUint)>> = BTreeMap::new();

    for (holder, share) in players.iter().zip(shares.iter()) {
        let batch = mac::generate_batch(n, share, l + 1)?;
        let keys_for_holder = key_from.entry(holder.clone()).or_default();
        let tags_for_holder = tag_to.entry(holder.clone()).or_default();
        for (verifier, (key, tag)) in players.iter().zip(batch.iter()) {
            keys_for_holder.insert(verifier.clone(), key.clone());
            tags_for_holder.insert(verifier.clone(), tag.clone());
        }
    }

    let mut records = BTreeMap::new();
    for (p, share) in players.iter().zip(shares.iter()) {
        let mut keys = BTreeMap::new();
        let mut tags = BTreeMap::new();
        for j in players {
            if let Some(key) = key_from.get(j).and_then(|m| m.get(p)) {
                keys.insert(j.clone(), key.clone());
            }
            if let Some(tag) = tag_to.get(p).and_then(|m| m.get(j)) {
                tags.insert(j.clone(), tag.clone());
            }
        }
        let record = RobustShareRecord { share: share.clone(), keys, tags };
        records.insert(p.clone(), record.to_json()?);
    }
    Ok(records)
}

/// Recovers the secret from `submitted` records, tolerating up to `t - 1` corrupt,
/// malformed, or colluding players, per §4.8.2.
///
/// Returns the recovered bytes, the sorted list of players whose shares were confirmed
/// authentic by the winning voting bloc, and the sorted list of players whose records were
/// structurally invalid.
///
/// # Errors
/// Returns [`ReconstructAuthenticatedError::Configuration`] if the reconstruction parameters
/// are invalid, or [`ReconstructAuthenticatedError::Failure`] if no unique secret could be
/// authorized.
pub fn reconstruct_authenticated(
    n: u64,
    t: u64,
    l: u64,
    submitted: &BTreeMap<PlayerId, String>,
) -> Result<(Vec<u8>, Vec<PlayerId>, Vec<PlayerId>), ReconstructAuthenticatedError> {
    // Validates the (n, L) pair against the same prime-selection rule used below, so a bad
    // configuration is reported up front rather than surfacing as an empty candidate set.
    shamir::sharing_prime(n, l)?;

    let p0: BTreeSet<PlayerId> = submitted.keys().cloned().collect();
    let mut invalid: BTreeSet<PlayerId> = BTreeSet::new();
    let mut parsed: BTreeMap<PlayerId, RobustShareRecord> = BTreeMap::new();

    // Step 1: parse.
    for (player, text) in submitted {
        match RobustShareRecord::from_json(text) {
            Ok(record) => {
                parsed.insert(player.clone(), record);
            }
            Err(_) => {
                invalid.insert(player.clone());
            }
        }
    }

    // Step 2: structural validation against the full set of responders P0.
    let mut structurally_invalid = Vec::new();
    for (player, record) in &parsed {
        let complete = p0.iter().all(|j| record.keys.contains_key(j) && record.tags.contains_key(j));
        if !complete {
            structurally_invalid.push(player.clone());
        }
    }
    for player in structurally_invalid {
        parsed.remove(&player);
        invalid.insert(player);
    }
    let p1 = parsed;

    if (p1.len() as u64) < t {
        return Err(ReconstructionFailure::InsufficientValidShares.into());
    }

    // Step 3: pairwise authentication.
    let mut accepted: BTreeMap<PlayerId, Vec<PlayerId>> = BTreeMap::new();
    for (v, record_v) in &p1 {
        let mut accepted_by_v = Vec::new();
        for (p, record_p) in &p1 {
            let Some(key) = record_v.keys.get(p) else { continue };
            let Some(tag) = record_p.tags.get(v) else { continue };
            if mac::validate(key, tag, &record_p.share, l + 1)? {
                accepted_by_v.push(p.clone());
            }
        }
        accepted.insert(v.clone(), accepted_by_v);
    }

    // Step 4: candidate reconstruction per verifier meeting the threshold.
    let mut candidates: BTreeMap<PlayerId, Vec<u8>> = BTreeMap::new();
    for (v, accepted_by_v) in &accepted {
        if (accepted_by_v.len() as u64) < t {
            continue;
        }
        let mut points = Vec::with_capacity(accepted_by_v.len());
        let mut unpairable = true;
        for p in accepted_by_v {
            let Some(record_p) = p1.get(p) else { continue };
            match pairing::elegant_unpair(&BigInt::from(record_p.share.clone())) {
                Ok(point) => points.push(point),
                Err(_) => {
                    unpairable = false;
                    break;
                }
            }
        }
        if !unpairable {
            continue;
        }
        let Ok(secret_int) = shamir::reconstruct_int(n, l, &points) else { continue };
        if let Ok(bytes) = codec::bytes_of_int(&secret_int) {
            candidates.insert(v.clone(), bytes);
        }
    }

    // Step 5: vote.
    let mut votes: HashMap<Vec<u8>, Vec<PlayerId>> = HashMap::new();
    for (v, bytes) in &candidates {
        votes.entry(bytes.clone()).or_default().push(v.clone());
    }
    let authorized: Vec<(Vec<u8>, Vec<PlayerId>)> =
        votes.into_iter().filter(|(_, verifiers)| (verifiers.len() as u64) >= t).collect();

    // Step 6: decide.
    match authorized.as_slice() {
        [(value, verifiers)] => {
            let mut verified_players: BTreeSet<PlayerId> = BTreeSet::new();
            for v in verifiers {
                if let Some(accepted_by_v) = accepted.get(v) {
                    verified_players.extend(accepted_by_v.iter().cloned());
                }
            }
            Ok((
                value.clone(),
                verified_players.into_iter().collect(),
                invalid.into_iter().collect(),
            ))
        }
        [] => Err(ReconstructionFailure::NoAuthorizedSecret.into()),
        _ => Err(ReconstructionFailure::AmbiguousAuthorizedSecrets.into()),
    }
}

/// Recovers the secret from `submitted` records without any cross-authentication.
///
/// Provides no guarantee against corruption; every parseable record with an integer `share` is
/// taken at face value. Intended only as a fallback diagnostic or for known-honest settings.
///
/// # Errors
/// Returns [`ReconstructUnauthenticatedError`] if the reconstruction parameters are invalid or
/// no structurally valid shares were submitted.
pub fn reconstruct_unauthenticated(
    n: u64,
    l: u64,
    submitted: &BTreeMap<PlayerId, String>,
) -> Result<Vec<u8>, ReconstructUnauthenticatedError> {
    let mut points = Vec::new();
    for text in submitted.values() {
        let Ok(record) = RobustShareRecord::from_json(text) else { continue };
        let Ok(point) = pairing::elegant_unpair(&BigInt::from(record.share)) else { continue };
        points.push(point);
    }
    let secret_int = shamir::reconstruct_int(n, l, &points)?;
    Ok(codec::bytes_of_int(&secret_int)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn players(names: &[&str]) -> Vec<PlayerId> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[rstest]
    #[case(5, 3)]
    #[case(9, 4)]
    fn shares_round_trip_through_any_threshold_subset(#[case] n: usize, #[case] t: u64) {
        let names: Vec<String> = (0..n).map(|i| format!("player{i}")).collect();
        let ids = players(&names.iter().map(String::as_str).collect::<Vec<_>>());
        let secret = b"correct horse battery staple".to_vec();
        let records = share_authenticated(&ids, t, secret.len() as u64, &secret).unwrap();

        let subset: BTreeMap<PlayerId, String> = records.into_iter().take(t as usize).collect();
        let (recovered, verified, invalid) = reconstruct_authenticated(n as u64, t, secret.len() as u64, &subset).unwrap();
        assert_eq!(recovered, secret);
        assert_eq!(verified.len(), t as usize);
        assert!(invalid.is_empty());
    }

    #[test]
    fn corrupted_share_is_excluded_but_reconstruction_still_succeeds() {
        let ids = players(&["a", "b", "c", "d", "e"]);
        let secret = b"0123456789abcdef0123456789abcdef".to_vec();
        let mut records = share_authenticated(&ids, 3, secret.len() as u64, &secret).unwrap();

        let victim: PlayerId = "a".parse().unwrap();
        let corrupted = RobustShareRecord::from_json(records.get(&victim).unwrap()).unwrap();
        let mut tampered = corrupted.clone();
        tampered.share = &tampered.share / 4u32;
        records.insert(victim.clone(), tampered.to_json().unwrap());

        let (recovered, verified, _) = reconstruct_authenticated(5, 3, secret.len() as u64, &records).unwrap();
        assert_eq!(recovered, secret);
        assert!(!verified.contains(&victim));
    }

    #[test]
    fn corrupted_share_alone_with_too_few_honest_players_fails() {
        let ids = players(&["a", "b", "c", "d", "e"]);
        let secret = b"0123456789abcdef0123456789abcdef".to_vec();
        let records = share_authenticated(&ids, 3, secret.len() as u64, &secret).unwrap();

        let victim: PlayerId = "a".parse().unwrap();
        let mut corrupted = RobustShareRecord::from_json(records.get(&victim).unwrap()).unwrap();
        corrupted.share = &corrupted.share / 4u32;

        let b: PlayerId = "b".parse().unwrap();
        let c: PlayerId = "c".parse().unwrap();
        let mut submitted = BTreeMap::new();
        submitted.insert(victim, corrupted.to_json().unwrap());
        submitted.insert(b.clone(), records.get(&b).unwrap().clone());
        submitted.insert(c.clone(), records.get(&c).unwrap().clone());

        let err = reconstruct_authenticated(5, 3, secret.len() as u64, &submitted).unwrap_err();
        assert!(matches!(err, ReconstructAuthenticatedError::Failure(_)));
    }

    #[test]
    fn colluding_minority_cannot_force_an_alternate_secret() {
        // n=20, t=10: a sub-threshold bloc of 6 forges its own shares and regenerates
        // mutually-consistent keys/tags among the bloc, but cannot touch the keys honest
        // verifiers hold, so the forged shares fail every honest verifier's check.
        let n = 20usize;
        let t = 10u64;
        let names: Vec<String> = (0..n).map(|i| format!("player{i}")).collect();
        let ids = players(&names.iter().map(String::as_str).collect::<Vec<_>>());
        let secret = b"the quick brown fox jumps over".to_vec();
        let l = secret.len() as u64;
        let mut records = share_authenticated(&ids, t, l, &secret).unwrap();

        let colluders: Vec<PlayerId> = ids.iter().take(6).cloned().collect();
        let mut forged: BTreeMap<PlayerId, RobustShareRecord> = colluders
            .iter()
            .map(|p| (p.clone(), RobustShareRecord::from_json(records.get(p).unwrap()).unwrap()))
            .collect();

        for (i, p) in colluders.iter().enumerate() {
            let fake_point = (BigInt::from(1000 + i as u64), BigInt::from(2000 + i as u64));
            let fake_share = pairing::elegant_pair(&fake_point.0, &fake_point.1).unwrap();
            forged.get_mut(p).unwrap().share = fake_share;
        }

        // For every ordered pair within the bloc (including self), regenerate a fresh
        // check-vector pair over the forged share, so the bloc validates itself consistently.
        for q in &colluders {
            let forged_share = forged.get(q).unwrap().share.clone();
            for p in &colluders {
                let (key, tag) = mac::generate(&forged_share, l + 1).unwrap();
                forged.get_mut(q).unwrap().tags.insert(p.clone(), tag);
                forged.get_mut(p).unwrap().keys.insert(q.clone(), key);
            }
        }

        for p in &colluders {
            records.insert(p.clone(), forged.get(p).unwrap().to_json().unwrap());
        }

        let (recovered, verified, invalid) = reconstruct_authenticated(n as u64, t, l, &records).unwrap();
        assert_eq!(recovered, secret);
        assert!(invalid.is_empty());
        for p in &colluders {
            assert!(!verified.contains(p));
        }
    }

    #[test]
    fn unparsable_record_is_reported_invalid_but_does_not_block_reconstruction() {
        let ids = players(&["a", "b", "c", "d", "e"]);
        let secret = b"0123456789abcdef0123456789abcdef".to_vec();
        let mut records = share_authenticated(&ids, 3, secret.len() as u64, &secret).unwrap();

        let victim: PlayerId = "a".parse().unwrap();
        records.insert(victim.clone(), "not json at all".to_string());

        let (recovered, _, invalid) = reconstruct_authenticated(5, 3, secret.len() as u64, &records).unwrap();
        assert_eq!(recovered, secret);
        assert!(invalid.contains(&victim));
    }

    #[test]
    fn rejects_threshold_larger_than_player_count() {
        let ids = players(&["a", "b"]);
        let err = share_authenticated(&ids, 5, 32, b"x").unwrap_err();
        assert!(matches!(err, ShareAuthenticatedError::Share(_)));
    }

    #[test]
    fn leading_zero_bytes_survive_the_round_trip() {
        let ids = players(&["a", "b", "c"]);
        let secret = vec![0u8, 0u8, 0x65];
        let records = share_authenticated(&ids, 2, secret.len() as u64, &secret).unwrap();
        let subset: BTreeMap<PlayerId, String> = records.into_iter().take(2).collect();
        let (recovered, _, _) = reconstruct_authenticated(3, 2, secret.len() as u64, &subset).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn unauthenticated_reconstruction_recovers_the_secret() {
        let ids = players(&["a", "b", "c"]);
        let secret = b"hello".to_vec();
        let records = share_authenticated(&ids, 2, secret.len() as u64, &secret).unwrap();
        let subset: BTreeMap<PlayerId, String> = records.into_iter().take(2).collect();
        let recovered = reconstruct_unauthenticated(3, secret.len() as u64, &subset).unwrap();
        assert_eq!(recovered, secret);
    }
}
