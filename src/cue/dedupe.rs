use crate::cue::models::Track;

fn identity(track: &Track) -> (Option<&str>, Option<&str>, Option<&str>) {
    (
        track.performer.as_deref(),
        track.songwriter.as_deref(),
        track.title.as_deref(),
    )
}

/// Drops every track whose performer, songwriter and title all equal those
/// of an earlier kept track. Survivors keep their relative order.
pub fn dedupe(tracks: &[Track]) -> Vec<Track> {
    let mut kept: Vec<Track> = Vec::with_capacity(tracks.len());

    for track in tracks {
        if kept.iter().any(|k| identity(k) == identity(track)) {
            continue;
        }
        kept.push(track.clone());
    }

    kept
}
