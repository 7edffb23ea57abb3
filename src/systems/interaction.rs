use bevy::prelude::*;

use crate::components::{
    Dialog, DialogText, Interactable, InteractionState, InteractionZone, Player,
};
use crate::resources::constants::{
    DIALOG_BOTTOM_MARGIN, DIALOG_ENGAGED_TEXT, DIALOG_FONT_SIZE, DIALOG_HEIGHT,
    DIALOG_LEFT_PERCENT, DIALOG_PROMPT_TEXT, DIALOG_TEXT_INSET, DIALOG_WIDTH_PERCENT,
    INTERACTION_TIMEOUT_SECS, PLAYER_COLLIDER_HALF,
};

/// Published for every frame the player's box overlaps an interactable zone.
/// The dialog systems subscribe to this channel instead of hooking physics
/// callbacks directly.
#[derive(Event)]
pub struct ZoneContact {
    pub zone: Entity,
}

/// AABB overlap test between the player and every interactable zone
pub fn detect_zone_contacts(
    player_query: Query<&Transform, With<Player>>,
    zone_query: Query<(Entity, &InteractionZone), With<Interactable>>,
    mut contacts: EventWriter<ZoneContact>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let body = Rect::from_center_half_size(
        player_transform.translation.truncate(),
        Vec2::splat(PLAYER_COLLIDER_HALF),
    );

    for (entity, zone) in &zone_query {
        if !zone.bounds.intersect(body).is_empty() {
            contacts.send(ZoneContact { zone: entity });
        }
    }
}

/// Idle + contact -> Interacting: put up the prompt box. Contacts while a
/// dialog is already open are drained and ignored, so re-entry is a no-op.
pub fn open_dialog(
    mut commands: Commands,
    mut contacts: EventReader<ZoneContact>,
    zone_query: Query<&InteractionZone>,
    mut player_query: Query<&mut InteractionState, With<Player>>,
) {
    let mut contacted_zone = None;
    for contact in contacts.read() {
        contacted_zone = Some(contact.zone);
    }
    let Some(zone) = contacted_zone else {
        return;
    };

    let Ok(mut state) = player_query.get_single_mut() else {
        return;
    };
    if *state != InteractionState::Idle {
        return;
    }
    *state = InteractionState::Interacting;
    if let Ok(zone) = zone_query.get(zone) {
        info!("interaction started at '{}'", zone.name);
    }

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(DIALOG_LEFT_PERCENT),
                bottom: Val::Px(DIALOG_BOTTOM_MARGIN),
                width: Val::Percent(DIALOG_WIDTH_PERCENT),
                height: Val::Px(DIALOG_HEIGHT),
                padding: UiRect::all(Val::Px(DIALOG_TEXT_INSET)),
                ..default()
            },
            BackgroundColor(Color::WHITE),
            Dialog::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(DIALOG_PROMPT_TEXT),
                TextFont {
                    font_size: DIALOG_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::BLACK),
                DialogText,
            ));
        });
}

/// F while the prompt is up: rewrite the text and arm the countdown.
/// Further presses are no-ops once the timer exists.
pub fn confirm_interaction(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut dialog_query: Query<(&mut Dialog, &Children)>,
    mut text_query: Query<&mut Text, With<DialogText>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Ok((mut dialog, children)) = dialog_query.get_single_mut() else {
        return;
    };
    if dialog.timer.is_some() {
        return;
    }

    dialog.timer = Some(Timer::from_seconds(INTERACTION_TIMEOUT_SECS, TimerMode::Once));
    for &child in children.iter() {
        if let Ok(mut text) = text_query.get_mut(child) {
            text.0 = DIALOG_ENGAGED_TEXT.to_string();
        }
    }
    info!("interaction confirmed");
}

/// A click anywhere on the box closes it immediately, timer armed or not
pub fn dismiss_dialog(
    mut commands: Commands,
    dialog_query: Query<(Entity, &Interaction), (Changed<Interaction>, With<Dialog>)>,
    mut player_query: Query<&mut InteractionState, With<Player>>,
) {
    for (entity, interaction) in &dialog_query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        commands.entity(entity).despawn_recursive();
        if let Ok(mut state) = player_query.get_single_mut() {
            *state = InteractionState::Idle;
        }
        info!("dialog dismissed");
    }
}

/// Tick the armed countdown; on expiry take the dialog (and its timer) down
pub fn expire_dialog(
    time: Res<Time>,
    mut commands: Commands,
    mut dialog_query: Query<(Entity, &mut Dialog)>,
    mut player_query: Query<&mut InteractionState, With<Player>>,
) {
    let Ok((entity, mut dialog)) = dialog_query.get_single_mut() else {
        return;
    };
    let Some(timer) = dialog.timer.as_mut() else {
        return;
    };

    if timer.tick(time.delta()).just_finished() {
        commands.entity(entity).despawn_recursive();
        if let Ok(mut state) = player_query.get_single_mut() {
            *state = InteractionState::Idle;
        }
        info!("interaction finished");
    }
}
