// Copyright 2024 The Druid Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tests that drive the widgets through druid's event loop.

use std::sync::Arc;

use druid::commands::CLOSE_WINDOW;
use druid::tests::harness::Harness;
use druid::tests::helpers::ModularWidget;
use druid::tests::move_mouse;
use druid::widget::prelude::*;
use druid::widget::{Align, Controller, CrossAxisAlignment, Flex};
use druid::{MouseButton, MouseEvent, Point, UnitPoint, WidgetExt, WindowId};
use test_log::test;

use super::{import_icons, test_icon, IMPORT_LABELS};
use crate::commands::{ITEM_CHOSEN, MENU_DISMISSED, ROW_CLICKED, SET_CURRENT_INDEX};
use crate::geometry::PopAreaStyle;
use crate::widget::dropdown::Dropdown;
use crate::widget::{MenuButton, MenuRow};

const BUTTON: Size = Size::new(96.0, 72.0);
const FACE: Point = Point::new(48.0, 24.0);

/// What the host of a button observed.
#[derive(Clone, Default, Data)]
struct Clicks {
    /// Indices passed to the `on_item_chosen` callback.
    chosen: Arc<Vec<usize>>,
    /// Indices that arrived as `ITEM_CHOSEN` notifications.
    notified: Arc<Vec<usize>>,
    menu_open: bool,
    current: Option<usize>,
}

/// Records `ITEM_CHOSEN` notifications bubbling up from a button.
struct CatchChosen;

impl<W: Widget<Clicks>> Controller<Clicks, W> for CatchChosen {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut Clicks,
        env: &Env,
    ) {
        if let Event::Notification(note) = event {
            if let Some(&index) = note.get(ITEM_CHOSEN) {
                Arc::make_mut(&mut data.notified).push(index);
                ctx.set_handled();
                return;
            }
        }
        child.event(ctx, event, data, env)
    }
}

fn import_button() -> MenuButton<Clicks> {
    MenuButton::new()
        .with_list(import_icons(), IMPORT_LABELS.iter().copied())
        .on_item_chosen(|_ctx, data: &mut Clicks, _env, index| {
            Arc::make_mut(&mut data.chosen).push(index);
        })
}

/// Places `button` at the window origin and mirrors its state into the data.
fn host(button: MenuButton<Clicks>, id: WidgetId) -> impl Widget<Clicks> {
    let observed = ModularWidget::new(button)
        .event_fn(|button, ctx, event, data: &mut Clicks, env| {
            button.event(ctx, event, data, env);
            data.menu_open = button.is_menu_open();
            data.current = button.current_index();
        })
        .lifecycle_fn(|button, ctx, event, data, env| button.lifecycle(ctx, event, data, env))
        .layout_fn(|button, ctx, bc, data, env| button.layout(ctx, bc, data, env))
        .paint_fn(|button, ctx, data, env| button.paint(ctx, data, env))
        .with_id(id);
    Align::new(UnitPoint::TOP_LEFT, observed).controller(CatchChosen)
}

fn mouse(pos: impl Into<Point>, button: MouseButton) -> MouseEvent {
    MouseEvent {
        button,
        count: 1,
        ..move_mouse(pos)
    }
}

fn click<T: Data>(harness: &mut Harness<T>, pos: impl Into<Point>, button: MouseButton) {
    let pos = pos.into();
    harness.event(Event::MouseDown(mouse(pos, button)));
    harness.event(Event::MouseUp(MouseEvent {
        count: 0,
        ..mouse(pos, button)
    }));
}

#[test]
fn face_click_reports_current_item() {
    let id = WidgetId::next();
    Harness::create_simple(Clicks::default(), host(import_button(), id), |harness| {
        harness.send_initial_events();
        harness.just_layout();
        assert_eq!(harness.data().current, Some(0));

        click(harness, FACE, MouseButton::Left);

        assert_eq!(*harness.data().chosen, vec![0]);
        assert_eq!(*harness.data().notified, vec![0]);
        assert!(!harness.data().menu_open);
    })
}

#[test]
fn pop_area_click_opens_without_reporting() {
    let styles = [
        PopAreaStyle::CenterRight,
        PopAreaStyle::CenterLeft,
        PopAreaStyle::CornerBottomRight,
        PopAreaStyle::CornerBottomLeft,
    ];
    for &style in &styles {
        let id = WidgetId::next();
        let button = import_button()
            .with_pop_area_visible(true)
            .with_pop_area_style(style);
        Harness::create_simple(Clicks::default(), host(button, id), |harness| {
            harness.send_initial_events();
            harness.just_layout();

            click(harness, FACE, MouseButton::Left);
            assert!(!harness.data().menu_open, "{:?}", style);
            assert_eq!(*harness.data().chosen, vec![0], "{:?}", style);

            click(harness, style.area(BUTTON).center(), MouseButton::Left);
            assert!(harness.data().menu_open, "{:?}", style);
            assert_eq!(*harness.data().chosen, vec![0], "{:?}", style);
            assert_eq!(*harness.data().notified, vec![0], "{:?}", style);
        })
    }
}

#[test]
fn hidden_pop_area_reports_instead_of_opening() {
    let id = WidgetId::next();
    let button = import_button().with_pop_area_style(PopAreaStyle::CenterRight);
    Harness::create_simple(Clicks::default(), host(button, id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, PopAreaStyle::CenterRight.area(BUTTON).center(), MouseButton::Left);
        assert!(!harness.data().menu_open);
        assert_eq!(*harness.data().chosen, vec![0]);
    })
}

#[test]
fn right_click_opens_menu() {
    let id = WidgetId::next();
    Harness::create_simple(Clicks::default(), host(import_button(), id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, FACE, MouseButton::Right);
        assert!(harness.data().menu_open);
        assert!(harness.data().chosen.is_empty());
        assert!(harness.data().notified.is_empty());
    })
}

#[test]
fn press_while_open_dismisses() {
    let id = WidgetId::next();
    Harness::create_simple(Clicks::default(), host(import_button(), id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, FACE, MouseButton::Right);
        assert!(harness.data().menu_open);

        click(harness, FACE, MouseButton::Left);
        assert!(!harness.data().menu_open);
        assert!(harness.data().chosen.is_empty());

        // the next click is an ordinary one again
        click(harness, FACE, MouseButton::Left);
        assert_eq!(*harness.data().chosen, vec![0]);
    })
}

#[test]
fn empty_button_does_nothing() {
    let id = WidgetId::next();
    let button = MenuButton::new()
        .with_pop_area_visible(true)
        .on_item_chosen(|_ctx, data: &mut Clicks, _env, index| {
            Arc::make_mut(&mut data.chosen).push(index);
        });
    Harness::create_simple(Clicks::default(), host(button, id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, FACE, MouseButton::Left);
        click(harness, FACE, MouseButton::Right);
        click(harness, PopAreaStyle::CenterRight.area(BUTTON).center(), MouseButton::Left);

        assert!(!harness.data().menu_open);
        assert!(harness.data().chosen.is_empty());
        assert!(harness.data().notified.is_empty());
    })
}

#[test]
fn row_clicks_follow_switching_policy() {
    for &(switch, emit_on_switch) in &[(false, false), (false, true), (true, false), (true, true)] {
        let id = WidgetId::next();
        let button = import_button()
            .click_to_switch(switch)
            .click_to_switch_with_emit(emit_on_switch);
        Harness::create_simple(Clicks::default(), host(button, id), |harness| {
            harness.send_initial_events();
            harness.just_layout();

            click(harness, FACE, MouseButton::Right);
            assert!(harness.data().menu_open);

            harness.submit_command(ROW_CLICKED.with(2).to(id));

            let expected: Vec<usize> = if !switch || emit_on_switch {
                vec![2]
            } else {
                Vec::new()
            };
            let label = format!("switch={} emit={}", switch, emit_on_switch);
            assert!(!harness.data().menu_open, "{}", label);
            assert_eq!(*harness.data().chosen, expected, "{}", label);
            assert_eq!(*harness.data().notified, expected, "{}", label);
            let current = if switch { 2 } else { 0 };
            assert_eq!(harness.data().current, Some(current), "{}", label);

            // the face shows whatever is current now
            click(harness, FACE, MouseButton::Left);
            assert_eq!(harness.data().chosen.last(), Some(&current), "{}", label);
        })
    }
}

#[test]
fn foreign_dismissal_keeps_menu_open() {
    let id = WidgetId::next();
    Harness::create_simple(Clicks::default(), host(import_button(), id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, FACE, MouseButton::Right);
        harness.submit_command(MENU_DISMISSED.with(WindowId::next()).to(id));
        assert!(harness.data().menu_open);
    })
}

#[test]
fn set_current_index_command() {
    let id = WidgetId::next();
    Harness::create_simple(Clicks::default(), host(import_button(), id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        harness.submit_command(SET_CURRENT_INDEX.with(1).to(id));
        assert_eq!(harness.data().current, Some(1));

        harness.submit_command(SET_CURRENT_INDEX.with(9).to(id));
        assert_eq!(harness.data().current, Some(1));

        click(harness, FACE, MouseButton::Left);
        assert_eq!(*harness.data().chosen, vec![1]);
    })
}

/// What the owner of a dropdown received.
#[derive(Clone, Default, Data)]
struct OwnerLog {
    clicked: Arc<Vec<usize>>,
    dismissed: usize,
    closed: usize,
}

fn owner(id: WidgetId) -> impl Widget<OwnerLog> {
    ModularWidget::new(())
        .event_fn(|_, _ctx, event, data: &mut OwnerLog, _env| {
            if let Event::Command(cmd) = event {
                if let Some(&index) = cmd.get(ROW_CLICKED) {
                    Arc::make_mut(&mut data.clicked).push(index);
                } else if cmd.is(MENU_DISMISSED) {
                    data.dismissed += 1;
                } else if cmd.is(CLOSE_WINDOW) {
                    data.closed += 1;
                }
            }
        })
        .with_id(id)
}

fn dropdown_with_owner(owner_id: WidgetId) -> impl Widget<OwnerLog> {
    let rows = (0..3)
        .map(|index| {
            let mut row = MenuRow::new(index, test_icon(8, 8), IMPORT_LABELS[index]);
            row.set_fixed_size(BUTTON);
            row
        })
        .collect();
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Dropdown::new(owner_id, rows))
        .with_child(owner(owner_id))
}

#[test]
fn row_click_reaches_owner_and_closes() {
    let owner_id = WidgetId::next();
    Harness::create_simple(OwnerLog::default(), dropdown_with_owner(owner_id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, (48.0, 72.0 + 36.0), MouseButton::Left);

        assert_eq!(*harness.data().clicked, vec![1]);
        assert_eq!(harness.data().closed, 1);
    })
}

#[test]
fn row_release_outside_still_clicks() {
    let owner_id = WidgetId::next();
    Harness::create_simple(OwnerLog::default(), dropdown_with_owner(owner_id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        harness.event(Event::MouseDown(mouse((48.0, 36.0), MouseButton::Left)));
        harness.event(Event::MouseUp(MouseEvent {
            count: 0,
            ..mouse((300.0, 350.0), MouseButton::Left)
        }));

        assert_eq!(*harness.data().clicked, vec![0]);
    })
}

#[test]
fn secondary_button_on_row_does_not_click() {
    let owner_id = WidgetId::next();
    Harness::create_simple(OwnerLog::default(), dropdown_with_owner(owner_id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        click(harness, (48.0, 36.0), MouseButton::Right);

        assert!(harness.data().clicked.is_empty());
        assert_eq!(harness.data().closed, 0);
    })
}

#[test]
fn closing_dropdown_tells_owner() {
    let owner_id = WidgetId::next();
    Harness::create_simple(OwnerLog::default(), dropdown_with_owner(owner_id), |harness| {
        harness.send_initial_events();
        harness.just_layout();

        harness.event(Event::WindowDisconnected);

        assert_eq!(harness.data().dismissed, 1);
        assert!(harness.data().clicked.is_empty());
    })
}
