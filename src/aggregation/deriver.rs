
//! Turns a cohort of quotients into the user-visible `MatchAggregate`:
//! ranked statistics, graphs and parsed collections. Everything here is
//! CPU-bound and synchronous; the quotient maps are fully materialized by
//! the time derivation starts.

// external uses
use std::collections::HashMap;

// my mods
use crate::aggregation::errors::*;
use crate::aggregation::keys;
use crate::models::*;

/// Derives the final report for `id`.
///
/// # Arguments
///
/// * `role` - the role the request targeted
/// * `champions` - quotient per champion, all sharing the request filters
/// * `roles` - quotient per role for the target champion
/// * `patches` - per-patch cohort snapshots for the by-patch graph
/// * `id` - the target champion
/// * `min_play_rate` - pick-rate floor for collection entries
pub fn derive(
    role : Role,
    champions : &HashMap<u32, MatchQuotient>,
    roles : &HashMap<Role, MatchQuotient>,
    patches : &HashMap<String, HashMap<u32, MatchQuotient>>,
    id : u32,
    min_play_rate : f64,
) -> Result<MatchAggregate> {

    // precondition -- the target must be part of the cohort
    let target = champions.get(&id)
        .ok_or_else(|| Error::from(ErrorKind::ChampionNotFound(id)))?;

    Ok(MatchAggregate {
        role : make_roles(champions, roles, role),
        statistics : make_statistics(champions, target, id),
        graphs : make_graphs(champions, patches, target, id),
        collections : make_collections(target, min_play_rate)?,
    })
}

fn make_roles(
    champions : &HashMap<u32, MatchQuotient>,
    roles : &HashMap<Role, MatchQuotient>,
    role : Role,
) -> MatchAggregateRoles {

    let total = champions.values().filter(|c| c.scalars.plays != 0.0).count() as u32;
    let total_for_champ : f64 = roles.values().map(|q| q.scalars.plays).sum();

    let role_stats = roles.iter()
        .map(|(r, quot)| RoleStats {
            role : *r,
            pick_rate : ratio(quot.scalars.plays, total_for_champ),
            num_matches : quot.scalars.plays as u32,
        })
        .collect();

    MatchAggregateRoles {
        role : Some(role),
        total_champions_in_role : total,
        role_stats,
    }
}

fn make_statistics(
    quots : &HashMap<u32, MatchQuotient>,
    target : &MatchQuotient,
    id : u32,
) -> MatchAggregateStatistics {

    let self_pick = pick_rate(quots, id);
    let self_ban = ban_rate(quots, id);
    let pick_rates : Vec<f64> = quots.keys().map(|cid| pick_rate(quots, *cid)).collect();
    let ban_rates : Vec<f64> = quots.keys().map(|cid| ban_rate(quots, *cid)).collect();

    let s = &target.scalars;
    MatchAggregateStatistics {
        scalars : ScalarStatistics {
            win_rate : scalar_statistic(quots, s.wins, |s| s.wins),
            pick_rate : derive_statistic(pick_rates, self_pick),
            ban_rate : derive_statistic(ban_rates, self_ban),
            games_played : scalar_statistic(quots, s.plays, |s| s.plays),
            gold_earned : scalar_statistic(quots, s.gold_earned, |s| s.gold_earned),
            kills : scalar_statistic(quots, s.kills, |s| s.kills),
            deaths : scalar_statistic(quots, s.deaths, |s| s.deaths),
            assists : scalar_statistic(quots, s.assists, |s| s.assists),
            damage_dealt : scalar_statistic(quots, s.damage_dealt, |s| s.damage_dealt),
            damage_taken : scalar_statistic(quots, s.damage_taken, |s| s.damage_taken),
            minions_killed : scalar_statistic(quots, s.minions_killed, |s| s.minions_killed),
            team_jungle_minions_killed :
                scalar_statistic(quots, s.team_jungle_minions_killed, |s| s.team_jungle_minions_killed),
            enemy_jungle_minions_killed :
                scalar_statistic(quots, s.enemy_jungle_minions_killed, |s| s.enemy_jungle_minions_killed),
            structure_damage : scalar_statistic(quots, s.structure_damage, |s| s.structure_damage),
            killing_spree : scalar_statistic(quots, s.killing_spree, |s| s.killing_spree),
            wards_bought : scalar_statistic(quots, s.wards_bought, |s| s.wards_bought),
            wards_placed : scalar_statistic(quots, s.wards_placed, |s| s.wards_placed),
            wards_killed : scalar_statistic(quots, s.wards_killed, |s| s.wards_killed),
            crowd_control : scalar_statistic(quots, s.crowd_control, |s| s.crowd_control),
            first_blood : scalar_statistic(quots, s.first_blood, |s| s.first_blood),
            first_blood_assist : scalar_statistic(quots, s.first_blood_assist, |s| s.first_blood_assist),
            double_kills : scalar_statistic(quots, s.doublekills, |s| s.doublekills),
            triple_kills : scalar_statistic(quots, s.triplekills, |s| s.triplekills),
            quadrakills : scalar_statistic(quots, s.quadrakills, |s| s.quadrakills),
            pentakills : scalar_statistic(quots, s.pentakills, |s| s.pentakills),
            physical_damage : scalar_statistic(quots, s.physical_damage, |s| s.physical_damage),
            magic_damage : scalar_statistic(quots, s.magic_damage, |s| s.magic_damage),
            true_damage : scalar_statistic(quots, s.true_damage, |s| s.true_damage),
        },
        deltas : DeltaStatistics {
            cs_diff : delta_statistic(quots, &target.deltas.cs_diff, |d| d.cs_diff),
            xp_diff : delta_statistic(quots, &target.deltas.xp_diff, |d| d.xp_diff),
            damage_taken_diff :
                delta_statistic(quots, &target.deltas.damage_taken_diff, |d| d.damage_taken_diff),
            xp_per_min : delta_statistic(quots, &target.deltas.xp_per_min, |d| d.xp_per_min),
            gold_per_min : delta_statistic(quots, &target.deltas.gold_per_min, |d| d.gold_per_min),
            towers_per_min : delta_statistic(quots, &target.deltas.towers_per_min, |d| d.towers_per_min),
            wards_placed : delta_statistic(quots, &target.deltas.wards_placed, |d| d.wards_placed),
            damage_taken : delta_statistic(quots, &target.deltas.damage_taken, |d| d.damage_taken),
        },
    }
}

/// Ranks one scalar metric across the cohort.
fn scalar_statistic(
    quots : &HashMap<u32, MatchQuotient>,
    self_value : f64,
    metric : impl Fn(&QuotientScalars) -> f64,
) -> Statistic {
    let vals = quots.values().map(|q| metric(&q.scalars)).collect();
    derive_statistic(vals, self_value)
}

/// Ranks one timeline metric across the cohort, bucket by bucket.
fn delta_statistic(
    quots : &HashMap<u32, MatchQuotient>,
    self_delta : &QuotientDelta,
    metric : impl Fn(&QuotientDeltas) -> QuotientDelta + Copy,
) -> DeltaStatistic {
    DeltaStatistic {
        zero_to_ten : derive_statistic(
            quots.values().map(|q| metric(&q.deltas).zero_to_ten).collect(),
            self_delta.zero_to_ten),
        ten_to_twenty : derive_statistic(
            quots.values().map(|q| metric(&q.deltas).ten_to_twenty).collect(),
            self_delta.ten_to_twenty),
        twenty_to_thirty : derive_statistic(
            quots.values().map(|q| metric(&q.deltas).twenty_to_thirty).collect(),
            self_delta.twenty_to_thirty),
        thirty_to_end : derive_statistic(
            quots.values().map(|q| metric(&q.deltas).thirty_to_end).collect(),
            self_delta.thirty_to_end),
    }
}

/// Ranks `value` within the cohort values. Sorts descending, so bigger is
/// better; ties all take the rank of their first occurrence, and a value
/// absent from the cohort gets rank 0.
fn derive_statistic(mut vals : Vec<f64>, value : f64) -> Statistic {
    if vals.is_empty() {
        return Statistic { value, ..Statistic::default() };
    }

    let average = vals.iter().sum::<f64>() / vals.len() as f64;

    vals.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let rank = vals.iter()
        .position(|v| *v == value)
        .map(|idx| idx + 1)
        .unwrap_or(0);

    let percentile = 1.0 - rank as f64 / vals.len() as f64;

    Statistic {
        rank : rank as u32,
        change : 0, // historical comparison not wired up yet
        value,
        average,
        percentile,
    }
}

/// Share of games `id` was picked in across the cohort. Ally play counts
/// see each game five times (once per teammate) and cohort plays see it
/// ten times (once per participant), hence the divisors.
fn pick_rate(champions : &HashMap<u32, MatchQuotient>, id : u32) -> f64 {
    let mut plays = 0.0;
    let mut champ_plays = 0.0;

    for quot in champions.values() {
        plays += quot.scalars.plays;
        if let Some(allied) = quot.allies.get(&id) {
            champ_plays += allied.play_count as f64;
        }
    }

    ratio(champ_plays / 5.0, plays / 10.0)
}

/// Share of games `id` was banned in across the cohort.
fn ban_rate(champions : &HashMap<u32, MatchQuotient>, id : u32) -> f64 {
    let mut plays = 0.0;
    let mut champ_bans = 0.0;

    for quot in champions.values() {
        plays += quot.scalars.plays;
        if let Some(banned) = quot.bans.get(&id) {
            champ_bans += banned.play_count as f64;
        }
    }

    ratio(champ_bans, plays)
}

fn make_graphs(
    champions : &HashMap<u32, MatchQuotient>,
    patches : &HashMap<String, HashMap<u32, MatchQuotient>>,
    target : &MatchQuotient,
    id : u32,
) -> MatchAggregateGraphs {

    let mut win_rate = HashMap::new();
    let mut pick_rates = HashMap::new();
    let mut ban_rates = HashMap::new();
    for (cid, champ) in champions {
        win_rate.insert(*cid, champ.scalars.wins);
        pick_rates.insert(*cid, pick_rate(champions, *cid));
        ban_rates.insert(*cid, ban_rate(champions, *cid));
    }

    let by_patch = patches.iter()
        .map(|(patch, of_patch)| ByPatch {
            patch : patch.clone(),
            // a patch without the target still charts, at zero
            win_rate : of_patch.get(&id).map(|q| q.scalars.wins).unwrap_or(0.0),
            pick_rate : pick_rate(of_patch, id),
            ban_rate : ban_rate(of_patch, id),
        })
        .collect();

    let by_game_length = target.durations.iter()
        .map(|(duration, stats)| ByGameLength {
            game_length : IntRange { min : *duration, max : *duration },
            win_rate : stats.wins,
        })
        .collect();

    MatchAggregateGraphs {
        distribution : Distribution {
            win_rate,
            pick_rate : pick_rates,
            ban_rate : ban_rates,
        },
        by_patch,
        by_game_length,
        // no experience source in the sums yet; stays empty for wire
        // compatibility
        by_experience : Vec::new(),
        physical_damage : target.scalars.physical_damage,
        magic_damage : target.scalars.magic_damage,
        true_damage : target.scalars.true_damage,
    }
}

fn make_collections(
    quot : &MatchQuotient, min_play_rate : f64) -> Result<MatchAggregateCollections> {

    let mut runes = Vec::new();
    for (key, stats) in picked(&quot.runes, min_play_rate) {
        let rune_set = keys::deserialize_bonus_set(key)
            .chain_err(|| "could not deserialize rune set")?;
        runes.push(RuneSet {
            runes : rune_set,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        });
    }

    let mut masteries = Vec::new();
    for (key, stats) in picked(&quot.masteries, min_play_rate) {
        let mastery_set = keys::deserialize_bonus_set(key)
            .chain_err(|| "could not deserialize mastery set")?;
        masteries.push(MasterySet {
            masteries : mastery_set,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        });
    }

    let mut keystones = Vec::new();
    for (key, stats) in picked(&quot.keystones, min_play_rate) {
        let (keystone, count) = keys::deserialize_bonus_set_element(key)
            .chain_err(|| "could not deserialize keystone")?;
        if count == 0 {
            // nil keystone row
            continue;
        }
        keystones.push(Keystone {
            keystone,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        });
    }

    let mut summoner_spells = Vec::new();
    for (key, stats) in picked(&quot.summoners, min_play_rate) {
        let (spell1, spell2) = keys::deserialize_summoners(key)
            .chain_err(|| "could not deserialize summoners")?;
        summoner_spells.push(SummonerSet {
            spell1,
            spell2,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        });
    }

    let trinkets = quot.trinkets.iter()
        .filter(|(_, stats)| stats.plays >= min_play_rate)
        .map(|(trinket, stats)| Trinket {
            trinket : *trinket,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        })
        .collect();

    let mut skill_orders = Vec::new();
    for (key, stats) in picked(&quot.skill_orders, min_play_rate) {
        let skill_order = keys::deserialize_skill_order(key)
            .chain_err(|| "could not deserialize skill order")?;
        skill_orders.push(SkillOrder {
            skill_order,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        });
    }

    let starter_items = build_collection(&quot.starter_items, min_play_rate)
        .chain_err(|| "could not deserialize starter items")?;
    let build_path = build_collection(&quot.build_path, min_play_rate)
        .chain_err(|| "could not deserialize build path")?;
    let core_build_list = build_collection(&quot.core_build_list, min_play_rate)
        .chain_err(|| "could not deserialize core build list")?;

    Ok(MatchAggregateCollections {
        runes,
        masteries,
        keystones,
        summoner_spells,
        trinkets,
        skill_orders,
        starter_items,
        build_path,
        core_build_list,
    })
}

/// Entries of a string-keyed quotient map clearing the pick-rate floor.
fn picked<'a>(
    map : &'a HashMap<String, QuotientSubscalars>,
    min_play_rate : f64,
) -> impl Iterator<Item = (&'a String, &'a QuotientSubscalars)> {
    map.iter().filter(move |(_, stats)| stats.plays >= min_play_rate)
}

fn build_collection(
    map : &HashMap<String, QuotientSubscalars>, min_play_rate : f64) -> Result<Vec<Build>> {

    let mut builds = Vec::new();
    for (key, stats) in picked(map, min_play_rate) {
        builds.push(Build {
            build : keys::deserialize_build(key)?,
            pick_rate : stats.plays,
            win_rate : stats.wins,
            num_matches : stats.play_count as u32,
        });
    }
    Ok(builds)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn quotient_with_wins(wins : f64) -> MatchQuotient {
        let mut quot = MatchQuotient::default();
        quot.scalars.plays = 100.0;
        quot.scalars.wins = wins;
        quot
    }

    fn cohort() -> HashMap<u32, MatchQuotient> {
        vec![
            (1, quotient_with_wins(0.6)),
            (2, quotient_with_wins(0.5)),
            (3, quotient_with_wins(0.4)),
        ].into_iter().collect()
    }

    #[test]
    fn missing_target_is_an_error() {
        let err = derive(Role::MID, &cohort(), &HashMap::new(), &HashMap::new(), 5, 0.0)
            .unwrap_err();
        assert_eq!(err.to_string(), "champion 5 does not exist in quotient map");
    }

    #[test]
    fn win_rate_rank_and_percentile() {
        let agg = derive(Role::MID, &cohort(), &HashMap::new(), &HashMap::new(), 2, 0.0)
            .unwrap();

        let win_rate = agg.statistics.scalars.win_rate;
        assert_eq!(win_rate.rank, 2);
        assert_eq!(win_rate.value, 0.5);
        assert!((win_rate.average - 0.5).abs() < 1e-12);
        assert!((win_rate.percentile - (1.0 - 2.0 / 3.0)).abs() < 1e-12);
        assert_eq!(win_rate.change, 0);
    }

    #[test]
    fn ties_share_the_first_rank() {
        let stat = derive_statistic(vec![0.6, 0.5, 0.5, 0.4], 0.5);
        assert_eq!(stat.rank, 2);
        assert_eq!(derive_statistic(vec![0.6, 0.5, 0.5, 0.4], 0.6).rank, 1);
    }

    #[test]
    fn absent_value_gets_rank_zero() {
        let stat = derive_statistic(vec![0.6, 0.4], 0.5);
        assert_eq!(stat.rank, 0);
    }

    #[test]
    fn role_stats_split_plays_across_roles() {
        let mut top = MatchQuotient::default();
        top.scalars.plays = 25.0;
        let mut jungle = MatchQuotient::default();
        jungle.scalars.plays = 75.0;
        let roles : HashMap<Role, MatchQuotient> =
            vec![(Role::TOP, top), (Role::JUNGLE, jungle)].into_iter().collect();

        let agg = derive(Role::JUNGLE, &cohort(), &roles, &HashMap::new(), 1, 0.0).unwrap();
        assert_eq!(agg.role.role, Some(Role::JUNGLE));
        assert_eq!(agg.role.total_champions_in_role, 3);

        let jungle_stats = agg.role.role_stats.iter()
            .find(|rs| rs.role == Role::JUNGLE)
            .unwrap();
        assert_eq!(jungle_stats.pick_rate, 0.75);
        assert_eq!(jungle_stats.num_matches, 75);
    }

    #[test]
    fn pick_rate_uses_team_and_game_divisors() {
        // two champions, 100 cohort plays; champion 1 appears as an ally
        // in 40 team rows
        let mut a = quotient_with_wins(0.5);
        a.allies.insert(1, QuotientSubscalars { plays : 0.4, wins : 0.5, play_count : 40 });
        let b = quotient_with_wins(0.5);
        let champions : HashMap<u32, MatchQuotient> =
            vec![(1, a), (2, b)].into_iter().collect();

        let agg = derive(Role::MID, &champions, &HashMap::new(), &HashMap::new(), 1, 0.0)
            .unwrap();
        // (40 / 5) / (200 / 10) = 0.4
        let pick = agg.graphs.distribution.pick_rate[&1];
        assert!((pick - 0.4).abs() < 1e-12);
    }

    #[test]
    fn ban_rate_counts_bans_over_plays() {
        let mut a = quotient_with_wins(0.5);
        a.bans.insert(2, QuotientSubscalars { plays : 0.3, wins : 0.0, play_count : 30 });
        let b = quotient_with_wins(0.5);
        let champions : HashMap<u32, MatchQuotient> =
            vec![(1, a), (2, b)].into_iter().collect();

        let agg = derive(Role::MID, &champions, &HashMap::new(), &HashMap::new(), 1, 0.0)
            .unwrap();
        assert!((agg.graphs.distribution.ban_rate[&2] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn by_patch_charts_missing_target_as_zero() {
        let mut patches = HashMap::new();
        patches.insert("6.17".to_string(), cohort());
        patches.insert("6.18".to_string(), HashMap::new());

        let agg = derive(Role::MID, &cohort(), &HashMap::new(), &patches, 2, 0.0).unwrap();
        assert_eq!(agg.graphs.by_patch.len(), 2);

        let present = agg.graphs.by_patch.iter().find(|p| p.patch == "6.17").unwrap();
        assert_eq!(present.win_rate, 0.5);
        let absent = agg.graphs.by_patch.iter().find(|p| p.patch == "6.18").unwrap();
        assert_eq!(absent.win_rate, 0.0);
    }

    #[test]
    fn by_game_length_comes_from_durations() {
        let mut champions = cohort();
        champions.get_mut(&2).unwrap().durations.insert(
            25, QuotientSubscalars { plays : 0.8, wins : 0.55, play_count : 80 });

        let agg = derive(Role::MID, &champions, &HashMap::new(), &HashMap::new(), 2, 0.0)
            .unwrap();
        assert_eq!(agg.graphs.by_game_length.len(), 1);
        let entry = agg.graphs.by_game_length[0];
        assert_eq!(entry.game_length, IntRange { min : 25, max : 25 });
        assert_eq!(entry.win_rate, 0.55);
    }

    #[test]
    fn collections_filter_by_min_play_rate() {
        let mut champions = cohort();
        {
            let target = champions.get_mut(&2).unwrap();
            target.runes.insert("5296:1:3|5297:2:2".to_string(),
                QuotientSubscalars { plays : 0.5, wins : 0.6, play_count : 50 });
            target.runes.insert("8000:1:1".to_string(),
                QuotientSubscalars { plays : 0.001, wins : 1.0, play_count : 1 });
            target.summoners.insert("4|12".to_string(),
                QuotientSubscalars { plays : 0.9, wins : 0.51, play_count : 90 });
            target.skill_orders.insert("QWEQR".to_string(),
                QuotientSubscalars { plays : 0.7, wins : 0.5, play_count : 70 });
            target.starter_items.insert("1055|2003".to_string(),
                QuotientSubscalars { plays : 0.6, wins : 0.5, play_count : 60 });
        }

        let agg = derive(Role::MID, &champions, &HashMap::new(), &HashMap::new(), 2, 0.01)
            .unwrap();

        let collections = &agg.collections;
        assert_eq!(collections.runes.len(), 1);
        assert_eq!(collections.runes[0].runes[&5296], 3);
        assert_eq!(collections.runes[0].num_matches, 50);
        assert_eq!(collections.summoner_spells[0].spell1, 4);
        assert_eq!(collections.summoner_spells[0].spell2, 12);
        assert_eq!(collections.skill_orders[0].skill_order.len(), 5);
        assert_eq!(collections.starter_items[0].build, vec![1055, 2003]);
    }

    #[test]
    fn zero_count_keystone_is_skipped() {
        let mut champions = cohort();
        {
            let target = champions.get_mut(&2).unwrap();
            target.keystones.insert("6161:1:1".to_string(),
                QuotientSubscalars { plays : 0.5, wins : 0.5, play_count : 50 });
            target.keystones.insert("".to_string(),
                QuotientSubscalars { plays : 0.4, wins : 0.5, play_count : 40 });
        }

        let agg = derive(Role::MID, &champions, &HashMap::new(), &HashMap::new(), 2, 0.0)
            .unwrap();
        assert_eq!(agg.collections.keystones.len(), 1);
        assert_eq!(agg.collections.keystones[0].keystone, 6161);
    }

    #[test]
    fn malformed_collection_key_fails_the_derivation() {
        let mut champions = cohort();
        champions.get_mut(&2).unwrap().skill_orders.insert("QWX".to_string(),
            QuotientSubscalars { plays : 0.5, wins : 0.5, play_count : 50 });

        let err = derive(Role::MID, &champions, &HashMap::new(), &HashMap::new(), 2, 0.0)
            .unwrap_err();
        assert!(err.to_string().contains("could not deserialize skill order"));
    }
}
