use std::time::{Duration, Instant};

use ratatui::style::Style;
use tui_textarea::TextArea;

use super::events::ComboEvent;
use super::focus::FocusTarget;
use super::settings::Settings;
use crate::frame::FrameQueue;
use crate::layout::LayoutRegions;
use crate::matcher::MatchMode;
use crate::navigator::VirtualFocus;
use crate::options::{OptionElement, OptionIndex, OptionSource};
use crate::scroll::ScrollState;
use crate::selection::{SelectionStore, TagList};
use crate::suggestions::{SuggestionId, SuggestionItem, SuggestionProvider, SuggestionSession};

/// Form field submitted in single mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

pub struct Combobox {
    pub(super) source: OptionSource,
    pub(super) index: OptionIndex,
    pub(super) selection: SelectionStore,
    pub(super) session: SuggestionSession,
    pub(super) focus: VirtualFocus,
    pub(super) input: TextArea<'static>,
    pub(super) field: HiddenField,
    pub(super) multiple: bool,
    pub(super) force_selection: bool,
    pub(super) match_mode: MatchMode,
    pub(super) placeholder: String,
    pub(super) max_length: Option<usize>,
    pub(super) icon: String,
    pub(super) disabled: bool,
    pub(super) read_only: bool,
    pub(super) required: bool,
    pub(super) invalid: bool,
    pub(super) name: String,
    pub(super) real_focus: FocusTarget,
    pub(super) trigger_label: String,
    pub(super) events: Vec<ComboEvent>,
    pub(super) frame: FrameQueue,
    pub(super) provider: Option<Box<dyn SuggestionProvider>>,
    pub(super) list_scroll: ScrollState,
    /// Screen areas from the last render
    pub layout_regions: LayoutRegions,
}

impl Combobox {
    /// Create a widget over `options`, deriving the initial selection from
    /// their selected marks
    pub fn new(options: Vec<OptionElement>, settings: Settings) -> Self {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text(settings.placeholder.clone());

        let mut combo = Self {
            index: OptionIndex::from_elements(&options),
            source: OptionSource::new(options),
            selection: SelectionStore::new(),
            session: SuggestionSession::new(settings.delay),
            focus: VirtualFocus::new(),
            input,
            field: HiddenField::default(),
            multiple: settings.multiple,
            force_selection: settings.force_selection,
            match_mode: settings.match_mode,
            placeholder: settings.placeholder,
            max_length: settings.max_length,
            icon: settings.icon,
            disabled: settings.disabled,
            read_only: settings.read_only,
            required: settings.required,
            invalid: false,
            name: settings.name,
            real_focus: FocusTarget::Outside,
            trigger_label: String::new(),
            events: Vec::new(),
            frame: FrameQueue::new(),
            provider: None,
            list_scroll: ScrollState::new(),
            layout_regions: LayoutRegions::new(),
        };

        combo.route_name();
        combo.sync_tag_list_state();
        combo.set_state_from_source();
        combo.update_trigger_label(None);
        combo.selection.capture_initial();
        combo
    }

    pub fn set_provider(&mut self, provider: impl SuggestionProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    pub fn clear_provider(&mut self) {
        self.provider = None;
    }

    // Committed state

    /// First committed value, or "" when nothing is committed
    pub fn value(&self) -> &str {
        self.selection.first()
    }

    pub fn values(&self) -> &[String] {
        self.selection.values()
    }

    pub fn tags(&self) -> &TagList {
        self.selection.tags()
    }

    /// Hidden form field used in single mode
    pub fn field(&self) -> &HiddenField {
        &self.field
    }

    /// Declared options currently marked selected
    pub fn selected_items(&self) -> Vec<&OptionElement> {
        self.source.selected_items()
    }

    pub fn selected_item(&self) -> Option<&OptionElement> {
        self.source.selected_items().into_iter().next()
    }

    pub fn options(&self) -> &[OptionElement] {
        self.source.items()
    }

    pub fn index(&self) -> &OptionIndex {
        &self.index
    }

    /// Name/value pairs a form submission would carry
    pub fn form_data(&self) -> Vec<(String, String)> {
        let name = self.name();
        if name.is_empty() || self.disabled {
            return Vec::new();
        }

        if self.multiple {
            self.values()
                .iter()
                .map(|value| (name.to_string(), value.clone()))
                .collect()
        } else {
            vec![(name.to_string(), self.field.value.clone())]
        }
    }

    // Properties

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Switch between single and multiple mode
    ///
    /// Changing the mode discards the committed values and the selected marks
    /// of all declared options.
    pub fn set_multiple(&mut self, multiple: bool) {
        if self.multiple == multiple {
            return;
        }
        log::debug!("switching to {} mode", if multiple { "multiple" } else { "single" });

        self.multiple = multiple;
        self.selection.reset_values();
        self.field.value.clear();
        self.with_observer_suspended(|combo| combo.source.deselect_all());
        self.route_name();
    }

    pub fn delay(&self) -> Duration {
        self.session.typing_delay()
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.session.typing().set_delay(delay);
    }

    pub fn force_selection(&self) -> bool {
        self.force_selection
    }

    pub fn set_force_selection(&mut self, force_selection: bool) {
        self.force_selection = force_selection;
    }

    pub fn match_mode(&self) -> &MatchMode {
        &self.match_mode
    }

    pub fn set_match_mode(&mut self, match_mode: MatchMode) {
        self.match_mode = match_mode;
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.input.set_placeholder_text(self.placeholder.clone());
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = icon.into();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.sync_tag_list_state();
        if disabled && self.session.is_open() {
            self.hide_suggestions();
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        self.sync_tag_list_state();
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Form field name, carried by the hidden field or the tag list
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.route_name();
    }

    // Input and suggestion view

    pub fn input_text(&self) -> String {
        self.input.lines().first().cloned().unwrap_or_default()
    }

    pub fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.input
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn suggestions(&self) -> &[SuggestionItem] {
        self.session.items()
    }

    /// Id of the latest fresh suggestion round
    pub fn suggestion_round(&self) -> u64 {
        self.session.round()
    }

    pub fn focused_suggestion(&self) -> Option<SuggestionId> {
        self.focus.focused_item(self.session.items()).map(|item| item.id)
    }

    /// Accessible label of the suggestion toggle
    pub fn trigger_label(&self) -> &str {
        &self.trigger_label
    }

    pub fn list_scroll(&self) -> &ScrollState {
        &self.list_scroll
    }

    pub fn list_scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.list_scroll
    }

    /// Rows the suggestion list occupies, including the loading row
    pub fn list_rows(&self) -> usize {
        self.session.items().len() + usize::from(self.session.is_loading())
    }

    pub fn real_focus(&self) -> FocusTarget {
        self.real_focus
    }

    /// Earliest pending timer, for the host's poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }

    pub fn drain_events(&mut self) -> Vec<ComboEvent> {
        std::mem::take(&mut self.events)
    }

    // Internal helpers

    pub(super) fn emit_change(&mut self) {
        log::debug!("change: {:?}", self.values());
        self.events.push(ComboEvent::Change {
            values: self.values().to_vec(),
        });
    }

    /// Replace the input line with `text`
    pub(super) fn set_input_text(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }

    /// Single mode submits through the hidden field, multiple mode through the
    /// tag list
    fn route_name(&mut self) {
        if self.multiple {
            self.selection.tags_mut().name = self.name.clone();
            self.field.name.clear();
        } else {
            self.field.name = self.name.clone();
            self.selection.tags_mut().name.clear();
        }
    }

    fn sync_tag_list_state(&mut self) {
        let locked = self.disabled || self.read_only;
        self.selection.tags_mut().disabled = locked;
    }

    pub(super) fn can_edit(&self) -> bool {
        !self.disabled && !self.read_only
    }
}
