use crate::catalog::Track;
use crate::controller::{PlaybackController, PlayerEvent, Surface, SubscriptionId};
use crate::media::MediaElement;
use crate::mpris::MprisHandle;

/// Mirror controller events onto the MPRIS service, so media keys and
/// `playerctl` see auto-advance and UI-driven changes too.
pub fn attach_mpris<M: MediaElement, S: Surface>(
    controller: &mut PlaybackController<M, S>,
    mpris: &MprisHandle,
) -> SubscriptionId {
    mpris.set_track_metadata(
        Some(controller.track_index()),
        Some(controller.current_track()),
    );
    mpris.set_playback(controller.is_playing());

    let tracks: Vec<Track> = controller.tracks().to_vec();
    let mpris = mpris.clone();
    controller.subscribe(Box::new(move |event: &PlayerEvent| match *event {
        PlayerEvent::TrackChanged { index } => {
            mpris.set_track_metadata(Some(index), tracks.get(index));
        }
        PlayerEvent::PlaybackChanged { playing } => mpris.set_playback(playing),
        PlayerEvent::ProgressChanged { .. } | PlayerEvent::PlaybackEnded { .. } => {}
    }))
}
