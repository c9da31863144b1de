//! Read-only analytics: rhythm, energy, targets and the full dashboard.

use ritmo_core::{
    AdjustedTargets, DashboardSnapshot, EnergyBand, EnergyScore, MetricProgress, PlanBlock,
    RhythmReport, Settings,
};

use super::{open, print_json, CliResult};

fn snapshot(settings: &Settings) -> Result<DashboardSnapshot, Box<dyn std::error::Error>> {
    let ritmo = open(settings)?;
    ritmo
        .snapshot()
        .ok_or_else(|| "not onboarded yet, run `ritmo onboard` first".into())
}

pub fn status(settings: &Settings, json: bool) -> CliResult {
    let snap = snapshot(settings)?;
    if json {
        return print_json(&serde_json::json!({
            "rhythm": snap.rhythm,
            "progress": snap.progress,
            "suggestedAction": snap.suggested_action,
        }));
    }
    print_rhythm(&snap.rhythm, &snap.progress, &snap.suggested_action);
    Ok(())
}

pub fn energy(settings: &Settings, json: bool) -> CliResult {
    let snap = snapshot(settings)?;
    if json {
        return print_json(&serde_json::json!({
            "energy": snap.energy,
            "band": snap.energy_band,
            "productive": snap.energy.is_productive(),
            "checkedIn": snap.checked_in,
            "planLabel": snap.plan_label,
            "plan": snap.plan,
        }));
    }
    print_energy(&snap.energy, snap.energy_band, snap.checked_in);
    println!();
    print_plan(&snap.plan_label, &snap.plan);
    Ok(())
}

pub fn targets(settings: &Settings, json: bool) -> CliResult {
    let snap = snapshot(settings)?;
    if json {
        return print_json(&serde_json::json!({
            "targets": snap.targets,
            "label": snap.targets_label,
        }));
    }
    print_targets(&snap.targets, &snap.targets_label);
    Ok(())
}

pub fn dashboard(settings: &Settings, json: bool) -> CliResult {
    let snap = snapshot(settings)?;
    if json {
        return print_json(&snap);
    }

    println!("Week {} .. {}", snap.week.start, snap.week.end);
    println!();
    print_rhythm(&snap.rhythm, &snap.progress, &snap.suggested_action);
    println!();
    print_energy(&snap.energy, snap.energy_band, snap.checked_in);
    println!();
    print_targets(&snap.targets, &snap.targets_label);
    println!();
    print_plan(&snap.plan_label, &snap.plan);
    println!();
    println!("Trend:");
    for point in &snap.chart {
        println!("  {:<5} {:>3} {}", point.label, point.contacts, bar(point.contacts));
    }
    Ok(())
}

fn print_rhythm(rhythm: &RhythmReport, progress: &[MetricProgress], action: &str) {
    println!("Rhythm: {}", rhythm.status.as_str());
    println!("  {}", rhythm.message);
    for p in progress {
        println!(
            "  {:<14} {:>4}/{:<4} {:>3.0}%",
            p.metric.as_str(),
            p.total,
            p.weekly_target,
            p.percent
        );
    }
    println!("Next: {action}");
}

fn print_energy(energy: &EnergyScore, band: EnergyBand, checked_in: bool) {
    let band = match band {
        EnergyBand::High => "high",
        EnergyBand::Medium => "medium",
        EnergyBand::Low => "low",
    };
    println!("Energy: {} ({band})", energy.total);
    println!(
        "  physical {}  mental {}  emotional {}  social {}",
        energy.physical, energy.mental, energy.emotional, energy.social
    );
    if !checked_in {
        println!("  no check-in today");
    }
}

fn print_targets(targets: &AdjustedTargets, label: &str) {
    println!("Targets {label}:");
    println!(
        "  contacts {}  conversations {}  meetings {}  sales {}",
        targets.contacts, targets.conversations, targets.meetings, targets.sales
    );
}

fn print_plan(label: &str, plan: &[PlanBlock]) {
    println!("Suggested day ({label}):");
    for block in plan {
        println!(
            "  {:<8} {:<13} {}",
            block.time_range(),
            block.kind.title(),
            block.note
        );
    }
}

fn bar(contacts: u32) -> String {
    "#".repeat(contacts.min(40) as usize)
}
