//! Command implementations for nagarctl.
//!
//! Every command follows the same shape: load the session, load the
//! working set, scope it through nagar_core, render. Mutating commands
//! write the data file back when one is in use.

use crate::session_store;
use crate::store::Store;
use crate::ui::{self, print_footer, print_header, print_kv, print_warn};
use anyhow::{bail, Result};
use chrono::Utc;
use console::style;
use nagar_core::analytics;
use nagar_core::assign::{bulk_assign, update_status, AssignTarget};
use nagar_core::complaint::{Category, Complaint, Priority, Status, CATEGORIES, STATUS_ORDER};
use nagar_core::department::Department;
use nagar_core::feed::FeedFilter;
use nagar_core::geo::CITY_BOUNDS;
use nagar_core::performance::staff_leaderboard;
use nagar_core::scope::{scope_staff, scope_visible};
use nagar_core::session::{Actor, Role, Session};
use nagar_core::sla::sla_hours_for;
use std::path::Path;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KW: usize = 18; // key column width

/// Log in, replacing any existing session.
pub fn login(
    session_path: &Path,
    name: &str,
    role: Role,
    department: Option<Department>,
    ward: Option<String>,
    id: Option<String>,
) -> Result<()> {
    if role == Role::DeptAdmin && department.is_none() {
        print_warn("dept-admin without --department will see no complaints");
    }
    if role == Role::WardOfficer && ward.is_none() {
        print_warn("ward-officer without --ward will see no complaints");
    }

    let actor = match id {
        // Roster logins keep their staff id so field-staff scope works.
        Some(id) => Actor::with_id(&id, name, role, department, ward),
        None => Actor::new(name, role, department, ward),
    };
    let session = Session {
        actor: Some(actor.clone()),
    };
    session_store::save(session_path, &session)?;

    println!(
        "{} logged in as {} ({})",
        style("✓").green(),
        style(&actor.name).bold(),
        actor.role
    );
    info!(actor = %actor.id, role = %actor.role, "session started");
    Ok(())
}

/// Log out and clear the session file.
pub fn logout(session_path: &Path) -> Result<()> {
    session_store::clear(session_path)?;
    println!("{} logged out", style("✓").green());
    Ok(())
}

/// Show the current session.
pub fn whoami(session_path: &Path) -> Result<()> {
    let session = session_store::load(session_path)?;
    match session.actor() {
        Some(actor) => {
            print_header("nagarctl", VERSION);
            print_kv("name", &actor.name, KW);
            print_kv("role", &actor.role.to_string(), KW);
            if let Some(dept) = actor.department {
                print_kv("department", &dept.to_string(), KW);
            }
            if let Some(ward) = &actor.ward {
                print_kv("ward", ward, KW);
            }
            print_kv("id", &actor.id, KW);
            print_footer();
        }
        None => println!("not logged in"),
    }
    Ok(())
}

/// Operations overview: tiles plus status distribution.
pub fn dashboard(data_path: Option<&Path>, session_path: &Path) -> Result<()> {
    let session = session_store::load(session_path)?;
    let store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);
    let snap = analytics::snapshot(&visible);
    let now = Utc::now();

    let on_duty = session
        .actor()
        .map(|actor| scope_staff(actor, &store.staff).len())
        .unwrap_or(0);

    print_header("nagarctl", VERSION);
    println!("  {}", style("City Operations Overview").bold());
    println!();
    print_kv("open complaints", &analytics::open_count(&visible).to_string(), KW);
    print_kv(
        "resolution rate",
        &format!("{}%", snap.resolution_percent()),
        KW,
    );
    print_kv(
        "high priority",
        &analytics::high_priority_count(&visible).to_string(),
        KW,
    );
    print_kv(
        "sla overdue",
        &analytics::overdue_count(&visible, now).to_string(),
        KW,
    );
    print_kv("staff on duty", &on_duty.to_string(), KW);
    println!();

    let max = snap.by_status.values().copied().max().unwrap_or(0);
    for &status in STATUS_ORDER {
        let count = snap.by_status.get(&status).copied().unwrap_or(0);
        println!(
            "  {:12} {:>3}  {}",
            status.to_string(),
            count,
            ui::count_bar(count, max, 24)
        );
    }
    print_footer();
    Ok(())
}

fn render_feed_row(complaint: &Complaint, now: chrono::DateTime<Utc>) {
    let overdue = if complaint.is_overdue(now) {
        format!("  {}", ui::overdue_badge())
    } else {
        String::new()
    };
    println!(
        "  {}  {}  {}  {}  {}{}",
        style(&complaint.id).bold(),
        style(&complaint.title).bold(),
        complaint.category,
        ui::priority_badge(complaint.priority),
        ui::status_badge(complaint.status),
        overdue
    );
    let assignee = complaint
        .assigned_to
        .as_deref()
        .map(|id| format!("assigned: {}", id))
        .unwrap_or_else(|| "unassigned".to_string());
    println!(
        "      {} • {} • {} • {}",
        complaint.location.ward,
        complaint.location.zone,
        complaint.created_at.format("%Y-%m-%d %H:%M"),
        assignee
    );
}

/// Filtered complaint feed.
pub fn feed(
    data_path: Option<&Path>,
    session_path: &Path,
    query: Option<String>,
    category: Option<Category>,
    status: Option<Status>,
    priority: Option<Priority>,
    overdue_only: bool,
) -> Result<()> {
    let session = session_store::load(session_path)?;
    let store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);

    let filter = FeedFilter {
        query,
        category,
        status,
        priority,
    };
    let now = Utc::now();
    let mut rows = filter.apply(&visible);
    if overdue_only {
        rows.retain(|c| c.is_overdue(now));
    }

    print_header("nagarctl", VERSION);
    println!(
        "  {} ({} of {} visible)",
        style("Complaint Feed").bold(),
        rows.len(),
        visible.len()
    );
    println!();
    if rows.is_empty() {
        println!("  {}", style("nothing to show").dim());
    }
    for complaint in &rows {
        render_feed_row(complaint, now);
    }
    print_footer();
    Ok(())
}

/// Staff performance leaderboard.
pub fn staff(data_path: Option<&Path>, session_path: &Path) -> Result<()> {
    let session = session_store::load(session_path)?;
    let store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);
    let roster = session
        .actor()
        .map(|actor| scope_staff(actor, &store.staff))
        .unwrap_or_default();
    let rows = staff_leaderboard(&roster, &visible, Utc::now());

    print_header("nagarctl", VERSION);
    println!("  {}", style("Staff Leaderboard").bold());
    println!();
    println!(
        "  {:<4} {:<12} {:<14} {:<6} {:>8} {:>8} {:>6}",
        "id", "name", "department", "ward", "assigned", "resolved", "sla%"
    );
    for row in &rows {
        println!(
            "  {:<4} {:<12} {:<14} {:<6} {:>8} {:>8} {:>5}%",
            row.staff_id,
            row.name,
            row.department.map(|d| d.to_string()).unwrap_or_default(),
            row.ward.as_deref().unwrap_or("-"),
            row.assigned,
            row.resolved,
            row.sla_compliance
        );
    }
    if rows.is_empty() {
        println!("  {}", style("no staff in scope").dim());
    }
    print_footer();
    Ok(())
}

/// Bulk-assign complaints, by nearest staff or an explicit staff id.
pub fn assign(
    data_path: Option<&Path>,
    session_path: &Path,
    ids: Vec<String>,
    nearest: bool,
    staff_id: Option<String>,
) -> Result<()> {
    if ids.is_empty() {
        bail!("select complaints to assign (--ids c1,c2,...)");
    }
    let target = match (nearest, staff_id) {
        (_, Some(staff_id)) => AssignTarget::Staff(staff_id),
        (true, None) => AssignTarget::Nearest,
        (false, None) => bail!("choose an assignment mode: --nearest or --staff <id>"),
    };

    let session = session_store::load(session_path)?;
    let mut store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);

    // The working set is the actor's scope; ids outside it are refused,
    // not silently assigned.
    let (in_scope, out_of_scope): (Vec<String>, Vec<String>) = ids
        .into_iter()
        .partition(|id| visible.iter().any(|c| &c.id == id));
    for id in &out_of_scope {
        print_warn(&format!("{}: not in your scope, skipped", id));
    }

    let report = bulk_assign(&mut store.complaints, &in_scope, &target, &store.staff)?;
    store.save()?;

    for (complaint_id, assignee) in &report.assigned {
        println!(
            "{} {} → {}",
            style("✓").green(),
            complaint_id,
            style(assignee).bold()
        );
    }
    for complaint_id in &report.skipped {
        println!(
            "{} {} left unassigned (no eligible staff)",
            style("•").yellow(),
            complaint_id
        );
    }
    if !store.is_persistent() && report.assigned_count() > 0 {
        println!(
            "  {}",
            style("sample data: changes not persisted (use --data)").dim()
        );
    }
    Ok(())
}

/// Set a complaint's status.
pub fn update(
    data_path: Option<&Path>,
    session_path: &Path,
    id: String,
    status: Status,
) -> Result<()> {
    let session = session_store::load(session_path)?;
    let mut store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);

    let Some(current) = visible.iter().find(|c| c.id == id) else {
        bail!("complaint {} is not in your scope", id);
    };
    if !current.status.is_forward(status) && current.status != status {
        print_warn(&format!(
            "moving {} backward: {} → {}",
            id, current.status, status
        ));
    }

    update_status(&mut store.complaints, &id, status);
    store.save()?;
    println!("{} {} is now {}", style("✓").green(), id, ui::status_badge(status));
    if !store.is_persistent() {
        println!(
            "  {}",
            style("sample data: changes not persisted (use --data)").dim()
        );
    }
    Ok(())
}

/// Show the routing table, or one category's routing and SLA windows.
pub fn route(category: Option<Category>) -> Result<()> {
    print_header("nagarctl", VERSION);
    println!("  {}", style("Category Routing").bold());
    println!();
    let categories: Vec<Category> = match category {
        Some(cat) => vec![cat],
        None => CATEGORIES.to_vec(),
    };
    println!(
        "  {:<12} {:<14} {:>6} {:>8} {:>6}",
        "category", "department", "HIGH", "MEDIUM", "LOW"
    );
    for cat in categories {
        println!(
            "  {:<12} {:<14} {:>5}h {:>7}h {:>5}h",
            cat.to_string(),
            nagar_core::route_department(cat).to_string(),
            sla_hours_for(cat, Priority::High),
            sla_hours_for(cat, Priority::Medium),
            sla_hours_for(cat, Priority::Low),
        );
    }
    print_footer();
    Ok(())
}

/// Normalized map positions for the visible complaints.
pub fn map(data_path: Option<&Path>, session_path: &Path) -> Result<()> {
    let session = session_store::load(session_path)?;
    let store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);
    let now = Utc::now();

    print_header("nagarctl", VERSION);
    println!("  {}", style("City Map (normalized)").bold());
    println!();
    for complaint in &visible {
        let (x, y) = CITY_BOUNDS.normalize(complaint.location.point());
        let marker = if complaint.is_overdue(now) {
            ui::overdue_badge()
        } else {
            ui::status_badge(complaint.status)
        };
        println!(
            "  {}  ({:.2}, {:.2})  {}  {}",
            complaint.id, x, y, complaint.location.ward, marker
        );
    }
    if visible.is_empty() {
        println!("  {}", style("nothing to show").dim());
    }
    print_footer();
    Ok(())
}

/// Department, status and daily breakdowns.
pub fn reports(data_path: Option<&Path>, session_path: &Path) -> Result<()> {
    let session = session_store::load(session_path)?;
    let store = Store::load(data_path)?;
    let visible = scope_visible(session.actor(), &store.complaints);
    let snap = analytics::snapshot(&visible);

    print_header("nagarctl", VERSION);

    println!("  {}", style("Complaints by Department").bold());
    let max = snap.by_department.values().copied().max().unwrap_or(0);
    for (dept, count) in &snap.by_department {
        println!(
            "  {:<14} {:>3}  {}",
            dept.to_string(),
            count,
            ui::count_bar(*count, max, 24)
        );
    }
    println!();

    println!("  {}", style("Complaints by Category").bold());
    for (cat, count) in analytics::category_counts(&visible) {
        println!("  {:<14} {:>3}", cat.to_string(), count);
    }
    println!();

    println!("  {}", style("Daily Trend").bold());
    for (day, count) in analytics::daily_counts(&visible) {
        println!("  {}  {:>3}", day, count);
    }
    println!();

    print_kv(
        "resolution rate",
        &format!("{}%", snap.resolution_percent()),
        KW,
    );
    print_kv(
        "avg resolution",
        &format!("{:.1}h", snap.avg_resolution_hours),
        KW,
    );
    print_footer();
    Ok(())
}
